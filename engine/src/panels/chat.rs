//! Chat transcript state.

use std::time::SystemTime;

use maquette_types::{ChatMessage, IdGen, MessageId, NonEmptyText};

/// The message list plus its id allocator. Messages are append-only and
/// ordered by insertion.
#[derive(Debug, Default)]
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    ids: IdGen,
}

impl ChatPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: NonEmptyText, timestamp: SystemTime) -> MessageId {
        let id = MessageId::new(self.ids.next());
        self.messages.push(ChatMessage::user(id, text, timestamp));
        id
    }

    pub fn push_assistant(&mut self, text: NonEmptyText, timestamp: SystemTime) -> MessageId {
        let id = MessageId::new(self.ids.next());
        self.messages
            .push(ChatMessage::assistant(id, text, timestamp));
        id
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use maquette_types::NonEmptyText;

    use super::ChatPanel;

    #[test]
    fn ids_stay_unique_across_senders() {
        let mut panel = ChatPanel::new();
        let now = SystemTime::UNIX_EPOCH;
        let a = panel.push_user(NonEmptyText::new("one").expect("non-blank"), now);
        let b = panel.push_assistant(NonEmptyText::new("two").expect("non-blank"), now);
        let c = panel.push_user(NonEmptyText::new("three").expect("non-blank"), now);
        assert!(a.value() < b.value() && b.value() < c.value());
        assert_eq!(panel.len(), 3);
    }
}
