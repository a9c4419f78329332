//! Browser adapters for the Nova console.

pub mod http;
pub mod storage;
pub mod prefs;

#[cfg(test)]
mod tests;

pub use http::HttpChatClient;
