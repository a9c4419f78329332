//! Identifier generation for conversations and messages.

use crate::conversation::ConversationId;
use crate::message::MessageId;

const CONVERSATION_ID_LEN: usize = 8;

/// Eight lowercase alphanumerics from a v4 UUID
pub fn new_conversation_id() -> ConversationId {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    ConversationId(raw[..CONVERSATION_ID_LEN].to_string())
}

/// Source of message stamps. Swappable so tests get deterministic ids.
pub trait MessageIdSource {
    fn next_id(&self) -> MessageId;
}

/// Stamps messages with the current wall-clock millisecond
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockIds;

impl MessageIdSource for SystemClockIds {
    fn next_id(&self) -> MessageId {
        let millis = chrono::Utc::now().timestamp_millis();
        MessageId(u64::try_from(millis).unwrap_or_default())
    }
}
