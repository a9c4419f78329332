use serde::{Deserialize, Serialize};
use crate::conversation::GREETING;

/// Key under which the client configuration is persisted
pub const CONFIG_STORAGE_KEY: &str = "nova:config";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub chat: ChatEndpointConfig,
    /// Seed text of every new conversation
    pub greeting: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chat: ChatEndpointConfig::default(),
            greeting: GREETING.to_string(),
        }
    }
}

impl ClientConfig {
    /// Decode a persisted config. Corrupt data yields the default.
    pub fn from_slice_or_default(data: &[u8]) -> Self {
        serde_json::from_slice(data).unwrap_or_default()
    }
}

/// Where the agent backend's chat endpoint lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatEndpointConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for ChatEndpointConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9001,
            path: "/chat".to_string(),
        }
    }
}

impl ChatEndpointConfig {
    pub fn url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}
