//! HTTP adapter for the agent backend's chat endpoint.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! `POST http://<host>:<port>/chat` with a JSON body, no auth, no streaming.

use async_trait::async_trait;
use gloo_net::http::Request;

use nova_core::ports::{ChatPort, ChatReply, ChatRequest};
use nova_types::{NovaError, Result, config::ChatEndpointConfig};

pub struct HttpChatClient {
    url: String,
}

impl HttpChatClient {
    pub fn new(config: &ChatEndpointConfig) -> Self {
        Self { url: config.url() }
    }
}

#[async_trait(?Send)]
impl ChatPort for HttpChatClient {
    async fn send(&self, req: ChatRequest) -> Result<ChatReply> {
        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(&req)
            .map_err(|e| NovaError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| NovaError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NovaError::Network(e.to_string()))?;

        reply_from_response(status, &body)
    }

    fn endpoint(&self) -> String {
        self.url.clone()
    }
}

/// Map a finished HTTP exchange onto the reply schema.
/// Non-2xx is an `Http` error; a 2xx body without a string `reply` is invalid.
pub fn reply_from_response(status: u16, body: &str) -> Result<ChatReply> {
    if !(200..300).contains(&status) {
        return Err(NovaError::Http {
            status,
            body: truncate(body, 200),
        });
    }
    ChatReply::parse(body)
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
