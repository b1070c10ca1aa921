//! Chat message domain model.
//!
//! `ChatMessage` is a real sum type, not a role tag plus sometimes-meaningful
//! fields. Constructors take `SystemTime` explicitly so the caller owns the
//! clock; nothing in this crate reads wall time.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::ids::MessageId;
use crate::proofs::NonEmptyText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMessage {
    id: MessageId,
    text: NonEmptyText,
    timestamp: SystemTime,
}

impl UserMessage {
    #[must_use]
    pub fn new(id: MessageId, text: NonEmptyText, timestamp: SystemTime) -> Self {
        Self {
            id,
            text,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessage {
    id: MessageId,
    text: NonEmptyText,
    timestamp: SystemTime,
}

impl AssistantMessage {
    #[must_use]
    pub fn new(id: MessageId, text: NonEmptyText, timestamp: SystemTime) -> Self {
        Self {
            id,
            text,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// One transcript entry. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatMessage {
    User(UserMessage),
    Assistant(AssistantMessage),
}

impl ChatMessage {
    #[must_use]
    pub fn user(id: MessageId, text: NonEmptyText, timestamp: SystemTime) -> Self {
        Self::User(UserMessage::new(id, text, timestamp))
    }

    #[must_use]
    pub fn assistant(id: MessageId, text: NonEmptyText, timestamp: SystemTime) -> Self {
        Self::Assistant(AssistantMessage::new(id, text, timestamp))
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        match self {
            ChatMessage::User(m) => m.id(),
            ChatMessage::Assistant(m) => m.id(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ChatMessage::User(m) => m.text(),
            ChatMessage::Assistant(m) => m.text(),
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        match self {
            ChatMessage::User(m) => m.timestamp(),
            ChatMessage::Assistant(m) => m.timestamp(),
        }
    }

    #[must_use]
    pub fn sender(&self) -> Sender {
        match self {
            ChatMessage::User(_) => Sender::User,
            ChatMessage::Assistant(_) => Sender::Assistant,
        }
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        matches!(self, ChatMessage::Assistant(_))
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::{ChatMessage, Sender};
    use crate::ids::MessageId;
    use crate::proofs::NonEmptyText;

    #[test]
    fn sender_matches_variant() {
        let now = SystemTime::UNIX_EPOCH;
        let text = NonEmptyText::new("hi").expect("non-blank");
        let user = ChatMessage::user(MessageId::new(1), text.clone(), now);
        let assistant = ChatMessage::assistant(MessageId::new(2), text, now);
        assert_eq!(user.sender(), Sender::User);
        assert_eq!(assistant.sender(), Sender::Assistant);
        assert!(assistant.is_assistant());
    }
}
