// src/decoder.rs
//
// Incremental UTF-8 decoding for the streamed reply body. The backend
// chunks the reply at arbitrary byte offsets, so a multi-byte character
// can straddle two chunks; the incomplete tail is held back and prepended
// to the next chunk.

use crate::errors::{HelpbotError, HelpbotResult};

#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        StreamDecoder::default()
    }

    /// Decodes `chunk` together with any bytes held back from the
    /// previous call. Returns the decoded text, which is empty when the
    /// whole buffer is an incomplete trailing sequence.
    ///
    /// An invalid byte sequence (as opposed to an incomplete one) is a
    /// decode fault and fails the turn.
    pub fn decode(&mut self, chunk: &[u8]) -> HelpbotResult<String> {
        self.pending.extend_from_slice(chunk);

        let valid_len = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) => {
                if e.error_len().is_some() {
                    // A byte that can never begin or continue a valid
                    // sequence, not just a truncated character.
                    self.pending.clear();
                    return Err(HelpbotError::decode_error(format!(
                        "invalid UTF-8 in response stream: {}",
                        e
                    )));
                }
                e.valid_up_to()
            }
        };

        let decoded: Vec<u8> = self.pending.drain(..valid_len).collect();
        String::from_utf8(decoded).map_err(|e| HelpbotError::decode_error(e.to_string()))
    }

    /// True when the stream ended in the middle of a character.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
