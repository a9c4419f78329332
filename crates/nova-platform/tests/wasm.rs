//! WASM-target tests for nova-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the preference helpers under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and matchMedia need a browser; under Node only the
//! missing-window path of `LocalStorage::open` is checked.

use wasm_bindgen_test::*;

use nova_core::ports::{ChatPort, StoragePort};
use nova_platform::http::HttpChatClient;
use nova_platform::prefs::{load_config, load_theme, save_config, save_theme};
use nova_platform::storage::{LocalStorage, MemoryStorage};
use nova_types::NovaError;
use nova_types::config::{ChatEndpointConfig, ClientConfig};
use nova_types::theme::ThemeMode;

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", "value1").await.unwrap();
    assert_eq!(storage.get("key1").await.unwrap().as_deref(), Some("value1"));
}

#[wasm_bindgen_test]
async fn memory_storage_missing_key() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").await.unwrap().is_none());
}

#[wasm_bindgen_test]
fn local_storage_without_window_is_js_interop() {
    match LocalStorage::open() {
        Err(NovaError::JsInterop(_)) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("localStorage opened without a window"),
    }
}

#[wasm_bindgen_test]
async fn theme_persists() {
    let storage = MemoryStorage::new();
    save_theme(&storage, ThemeMode::Light).await.unwrap();
    assert_eq!(load_theme(&storage, None).await, ThemeMode::Light);
    save_theme(&storage, ThemeMode::Dark).await.unwrap();
    assert_eq!(load_theme(&storage, Some(false)).await, ThemeMode::Dark);
}

#[wasm_bindgen_test]
async fn config_persists() {
    let storage = MemoryStorage::new();
    let mut config = ClientConfig::default();
    config.chat.host = "10.0.0.5".to_string();
    save_config(&storage, &config).await.unwrap();
    assert_eq!(load_config(&storage).await.chat.host, "10.0.0.5");
}

#[wasm_bindgen_test]
fn http_client_endpoint() {
    let client = HttpChatClient::new(&ChatEndpointConfig::default());
    assert_eq!(client.endpoint(), "http://127.0.0.1:9001/chat");
}
