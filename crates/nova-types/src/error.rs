use thiserror::Error;

/// The one line the user sees for every transport failure
pub const CANNOT_REACH_SERVER: &str = "Error: Cannot reach server.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NovaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for NovaError {
    fn from(e: serde_json::Error) -> Self {
        NovaError::Serialization(e.to_string())
    }
}
