pub mod header;
pub mod sidebar;
pub mod chat;
pub mod placeholders;
pub mod settings;
pub mod status;
