use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the open dialog.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// The conversation held in memory for the lifetime of the dialog. Nothing is
/// persisted; closing the program discards it.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str) {
        self.push(Role::User, text);
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.push(Role::Assistant, text);
    }

    fn push(&mut self, role: Role, text: &str) {
        self.messages.push(Message {
            role,
            text: text.to_string(),
            timestamp: Local::now(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push_user("make the button red");
        transcript.push_assistant("Changed the background to red.");

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "make the button red");
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[0].timestamp <= messages[1].timestamp);
    }
}
