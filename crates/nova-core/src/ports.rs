//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `nova-core` (pure Rust).
//! Implementations live in `nova-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use nova_types::{
    NovaError, Result,
    conversation::ConversationId,
    message::Role,
};

// ─── Chat Port ───────────────────────────────────────────────

/// Body of `POST /chat`.
///
/// Serializes to exactly
/// `{"message": .., "role": "user", "session_id": .., "request_id": null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub role: Role,
    pub session_id: ConversationId,
    /// Reserved for idempotency tracking; always `None` today
    pub request_id: Option<String>,
}

impl ChatRequest {
    pub fn user(message: impl Into<String>, session_id: ConversationId) -> Self {
        Self {
            message: message.into(),
            role: Role::User,
            session_id,
            request_id: None,
        }
    }
}

/// Validated success body. Only `reply` is read; every other field is
/// ignored whatever its type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    /// Parse a response body. A missing or non-string `reply` is an
    /// `InvalidResponse`, same as a body that is not JSON at all.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| NovaError::InvalidResponse(e.to_string()))
    }
}

#[async_trait(?Send)]
pub trait ChatPort {
    /// Send one user utterance and wait for the agent's reply
    async fn send(&self, req: ChatRequest) -> Result<ChatReply>;

    /// Where requests go (for logging/debug)
    fn endpoint(&self) -> String;
}

// ─── Storage Port ────────────────────────────────────────────

/// String key/value storage. Browser localStorage is the primary backend.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
