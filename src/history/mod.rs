use crate::models::chat::ConversationMessage;

/// Append-only record of one session's exchanges. It can only grow by
/// whole messages or be emptied all at once.
#[derive(Debug, Default, Clone)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ConversationMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Owned copy of the log; mutating it never reaches the log itself.
    pub fn snapshot(&self) -> Vec<ConversationMessage> {
        self.messages.clone()
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}

pub fn format_transcript(messages: &[ConversationMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let mut result = String::from("Conversation so far:\n");
    for msg in messages {
        result.push_str(
            &format!(
                "[{}] {}: {}\n",
                msg.timestamp().format("%H:%M:%S"),
                msg.role(),
                msg.content()
            )
        );
    }

    result
}
