use serde::{Deserialize, Serialize};
use crate::conversation::ConversationId;
use crate::message::Role;

/// Events emitted by the console core.
/// UI drains these each frame for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NovaEvent {
    /// A message was appended to a conversation
    MessageAppended { conversation_id: ConversationId, role: Role },

    /// A chat request for this conversation is in flight
    RequestStarted { conversation_id: ConversationId },

    /// The request failed; `reason` is the diagnostic detail behind the
    /// generic error message the user sees
    RequestFailed { conversation_id: ConversationId, reason: String },

    /// The chat request settled; `ok` is false when the error text was appended
    RequestSettled { conversation_id: ConversationId, ok: bool },

    /// A reply landed in a conversation that was not active at the time
    BackgroundReply { conversation_id: ConversationId },
}
