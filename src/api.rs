// src/api.rs

use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::Client;

use crate::config::get_config;
use crate::constants::CHAT_ENDPOINT_PATH;
use crate::decoder::StreamDecoder;
use crate::errors::{HelpbotError, HelpbotResult};
use crate::models::Message;

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// HTTP client for the HelpBot chat backend.
#[derive(Clone, Debug)]
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    /// Builds a client from the global config.
    pub fn from_config() -> HelpbotResult<Self> {
        let config = get_config();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| HelpbotError::api_error(format!("failed to build HTTP client: {}", e)))?;
        Ok(ChatClient {
            client,
            base_url: config.base_url,
        })
    }

    /// Client against an explicit base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ChatClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POSTs the conversation payload and opens the reply as an
    /// incrementally readable text stream. Any non-success status is an
    /// error; there is no per-status branching.
    pub async fn open_stream(&self, payload: &[Message]) -> HelpbotResult<ReplyStream> {
        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT_PATH);
        log::debug!("POST {} ({} messages)", url, payload.len());

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| HelpbotError::api_error(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HelpbotError::api_error(format!(
                "chat endpoint returned {}",
                status
            )));
        }

        Ok(ReplyStream {
            bytes: Box::pin(response.bytes_stream()),
            decoder: StreamDecoder::new(),
        })
    }
}

/// The assistant reply, one decoded text fragment at a time. Reads are
/// strictly sequential; there is no parallel consumption of the body.
pub struct ReplyStream {
    bytes: ByteStream,
    decoder: StreamDecoder,
}

impl ReplyStream {
    /// The next decoded fragment, or `None` once the body is exhausted.
    /// Chunks that end mid-character produce no output of their own; the
    /// held-back bytes complete with the next chunk.
    pub async fn next_text(&mut self) -> HelpbotResult<Option<String>> {
        while let Some(chunk) = self.bytes.next().await {
            let chunk =
                chunk.map_err(|e| HelpbotError::api_error(format!("stream read error: {}", e)))?;
            let text = self.decoder.decode(&chunk)?;
            if !text.is_empty() {
                return Ok(Some(text));
            }
        }
        if self.decoder.has_pending() {
            log::warn!("reply stream ended mid-character; dropping trailing bytes");
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn streams_the_reply_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Hi there"))
            .mount(&server)
            .await;

        let client = ChatClient::with_base_url(server.uri());
        let mut stream = client
            .open_stream(&[Message::user("Hello")])
            .await
            .unwrap();

        let mut reply = String::new();
        while let Some(text) = stream.next_text().await.unwrap() {
            reply.push_str(&text);
        }
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn sends_the_payload_as_an_ordered_role_content_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!([
                { "role": "user", "content": "first" },
                { "role": "assistant", "content": "reply" },
                { "role": "user", "content": "second" },
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let payload = vec![
            Message::user("first"),
            Message::assistant("reply"),
            Message::user("second"),
        ];
        let client = ChatClient::with_base_url(server.uri());
        let mut stream = client.open_stream(&payload).await.unwrap();
        while stream.next_text().await.unwrap().is_some() {}
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ChatClient::with_base_url(server.uri());
        let result = client.open_stream(&[Message::user("Hello")]).await;
        assert!(matches!(result, Err(HelpbotError::Api(_))));
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        // Nothing listens on this port.
        let client = ChatClient::with_base_url("http://127.0.0.1:9");
        let result = client.open_stream(&[Message::user("Hello")]).await;
        assert!(matches!(result, Err(HelpbotError::Api(_))));
    }

    #[tokio::test]
    async fn multi_byte_reply_decodes_cleanly() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Héllo 🌍"))
            .mount(&server)
            .await;

        let client = ChatClient::with_base_url(server.uri());
        let mut stream = client.open_stream(&[Message::user("hi")]).await.unwrap();
        let mut reply = String::new();
        while let Some(text) = stream.next_text().await.unwrap() {
            reply.push_str(&text);
        }
        assert_eq!(reply, "Héllo 🌍");
    }
}
