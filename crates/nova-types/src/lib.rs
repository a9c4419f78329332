pub mod message;
pub mod conversation;
pub mod ids;
pub mod panel;
pub mod theme;
pub mod config;
pub mod error;
pub mod event;


pub use error::NovaError;
pub type Result<T> = std::result::Result<T, NovaError>;
