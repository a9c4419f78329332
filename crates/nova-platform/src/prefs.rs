//! Persisted preferences: theme and client config.

use nova_core::ports::StoragePort;
use nova_types::{
    Result,
    config::{ClientConfig, CONFIG_STORAGE_KEY},
    theme::{ThemeMode, THEME_STORAGE_KEY},
};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The browser's colour-scheme preference, if it can be queried
pub fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_SCHEME_QUERY).ok()??;
    Some(query.matches())
}

/// Stored theme, else the system preference, else dark.
/// Storage errors are logged and treated as "nothing stored".
pub async fn load_theme(storage: &dyn StoragePort, system_prefers_dark: Option<bool>) -> ThemeMode {
    let stored = match storage.get(THEME_STORAGE_KEY).await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read theme preference: {}", e);
            None
        }
    };
    ThemeMode::resolve(stored.as_deref(), system_prefers_dark)
}

pub async fn save_theme(storage: &dyn StoragePort, mode: ThemeMode) -> Result<()> {
    storage.set(THEME_STORAGE_KEY, mode.as_str()).await
}

/// Persisted config, or the default when absent or unreadable
pub async fn load_config(storage: &dyn StoragePort) -> ClientConfig {
    match storage.get(CONFIG_STORAGE_KEY).await {
        Ok(Some(json)) => {
            let config = ClientConfig::from_slice_or_default(json.as_bytes());
            log::info!("Config restored from {}", storage.backend_name());
            config
        }
        Ok(None) => ClientConfig::default(),
        Err(e) => {
            log::warn!("Could not read config ({}), using defaults", e);
            ClientConfig::default()
        }
    }
}

pub async fn save_config(storage: &dyn StoragePort, config: &ClientConfig) -> Result<()> {
    let json = serde_json::to_string(config)?;
    storage.set(CONFIG_STORAGE_KEY, &json).await
}
