//! Nova console core: conversation state machine and the chat transport
//! adapter, behind platform-free port traits.

pub mod ports;
pub mod event_bus;
pub mod store;
pub mod chat;
pub mod view;
pub mod console;
