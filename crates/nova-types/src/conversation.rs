use std::fmt;

use serde::{Deserialize, Serialize};
use crate::message::{Message, MessageId};

pub const DEFAULT_TITLE: &str = "New chat";

pub const GREETING: &str =
    "Hi, I’m Nova’s Builder+Agent UI. Tell me what you want to do with your project.";

/// Opaque, locally-unique conversation identifier.
/// Doubles as the backend `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        ConversationId(s.to_string())
    }
}

/// An ordered, append-only thread of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    messages: Vec<Message>,
}

impl Conversation {
    /// A fresh conversation seeded with the agent greeting
    pub fn new(id: ConversationId, seed_id: MessageId) -> Self {
        Self::with_greeting(id, seed_id, GREETING)
    }

    pub fn with_greeting(id: ConversationId, seed_id: MessageId, greeting: &str) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            messages: vec![Message::agent(seed_id, greeting)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The only way to change the message sequence
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
