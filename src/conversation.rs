// src/conversation.rs
//
// The conversation store. Every mutation returns a fresh snapshot; a
// snapshot handed to the renderer never changes underneath it.

use crate::constants::GREETING_TEXT;
use crate::models::Message;

/// Informal author tag for entries that only exist locally. The backend
/// never sees this shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// One element of the transcript.
///
/// `Local` is the greeting shape (`sender`/`text`); `Turn` is the wire
/// shape (`role`/`content`). Keeping them as separate variants is what
/// guarantees the greeting stays out of the outbound payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Local { sender: Sender, text: String },
    Turn(Message),
}

impl Entry {
    pub fn text(&self) -> &str {
        match self {
            Entry::Local { text, .. } => text,
            Entry::Turn(msg) => &msg.content,
        }
    }

    pub fn is_from_user(&self) -> bool {
        match self {
            Entry::Local { sender, .. } => *sender == Sender::User,
            Entry::Turn(msg) => msg.role == crate::models::Role::User,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Entry::Local { text, .. } => text,
            Entry::Turn(msg) => &mut msg.content,
        }
    }
}

/// Ordered message transcript, seeded with the greeting. Mutated only by
/// the stream consumer, read by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    entries: Vec<Entry>,
}

impl Conversation {
    /// A fresh conversation containing only the assistant greeting.
    pub fn new() -> Self {
        Conversation {
            entries: vec![Entry::Local {
                sender: Sender::Ai,
                text: GREETING_TEXT.to_string(),
            }],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Snapshot with `message` appended as a new turn.
    pub fn append(&self, message: Message) -> Conversation {
        let mut entries = self.entries.clone();
        entries.push(Entry::Turn(message));
        Conversation { entries }
    }

    /// Snapshot with `delta` concatenated onto the last entry's text.
    ///
    /// No-op on an empty conversation; the greeting seed makes that
    /// unreachable in practice.
    pub fn append_to_last(&self, delta: &str) -> Conversation {
        let mut entries = self.entries.clone();
        if let Some(last) = entries.last_mut() {
            last.text_mut().push_str(delta);
        }
        Conversation { entries }
    }

    /// Snapshot with the last entry fully replaced. Used for the error
    /// fallback, where partial streamed text is discarded.
    pub fn replace_last(&self, message: Message) -> Conversation {
        let mut entries = self.entries.clone();
        if let Some(last) = entries.last_mut() {
            *last = Entry::Turn(message);
        }
        Conversation { entries }
    }

    /// The ordered `{role, content}` list sent to the backend. `Local`
    /// entries (the greeting) are excluded.
    pub fn payload(&self) -> Vec<Message> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Turn(msg) => Some(msg.clone()),
                Entry::Local { .. } => None,
            })
            .collect()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Conversation::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn new_conversation_has_only_the_greeting() {
        let convo = Conversation::new();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.last().unwrap().text(), GREETING_TEXT);
        assert!(!convo.last().unwrap().is_from_user());
    }

    #[test]
    fn append_to_last_keeps_length() {
        let convo = Conversation::new()
            .append(Message::user("hello"))
            .append(Message::assistant(""));
        let updated = convo.append_to_last("Hi");
        assert_eq!(updated.len(), convo.len());
        assert_eq!(updated.last().unwrap().text(), "Hi");
    }

    #[test]
    fn snapshots_are_immutable() {
        let before = Conversation::new().append(Message::assistant("partial"));
        let after = before.append_to_last(" more");
        assert_eq!(before.last().unwrap().text(), "partial");
        assert_eq!(after.last().unwrap().text(), "partial more");
    }

    #[test]
    fn fold_is_associative() {
        let base = Conversation::new().append(Message::assistant(""));
        let fragments = ["Hi", " there", ", how", " can I help?"];

        let piecewise = fragments
            .iter()
            .fold(base.clone(), |convo, frag| convo.append_to_last(frag));
        let combined = base.append_to_last(&fragments.concat());

        assert_eq!(piecewise, combined);
    }

    #[test]
    fn replace_last_discards_partial_text() {
        let convo = Conversation::new()
            .append(Message::user("hello"))
            .append(Message::assistant("par"))
            .replace_last(Message::assistant("fallback"));
        assert_eq!(convo.last().unwrap().text(), "fallback");
        assert_eq!(convo.len(), 3);
    }

    #[test]
    fn payload_excludes_the_greeting() {
        let convo = Conversation::new()
            .append(Message::user("hello"))
            .append(Message::assistant("hi"));
        let payload = convo.payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].role, Role::User);
        assert_eq!(payload[1].role, Role::Assistant);
    }

    #[test]
    fn append_to_last_on_empty_is_a_noop() {
        let empty = Conversation { entries: Vec::new() };
        let still_empty = empty.append_to_last("delta");
        assert!(still_empty.is_empty());
    }
}
