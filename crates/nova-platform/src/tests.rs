#[cfg(test)]
mod tests {
    use crate::http::reply_from_response;
    use crate::prefs::*;
    use crate::storage::MemoryStorage;
    use nova_core::ports::StoragePort;
    use nova_types::config::{ClientConfig, CONFIG_STORAGE_KEY};
    use nova_types::theme::{ThemeMode, THEME_STORAGE_KEY};
    use nova_types::NovaError;
    use futures::executor::block_on;

    // ─── Response mapping ────────────────────────────────────

    #[test]
    fn test_reply_from_ok_response() {
        let reply = reply_from_response(200, r#"{"session_id":"ab12cd34","reply":"hi there"}"#).unwrap();
        assert_eq!(reply.reply, "hi there");
    }

    #[test]
    fn test_reply_from_server_error() {
        let err = reply_from_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            NovaError::Http { status: 500, body: "Internal Server Error".to_string() }
        );
    }

    #[test]
    fn test_reply_error_body_is_truncated() {
        let body = "x".repeat(500);
        match reply_from_response(502, &body) {
            Err(NovaError::Http { body, .. }) => assert_eq!(body.chars().count(), 201),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_reply_from_ok_with_non_string_session_id() {
        let reply = reply_from_response(200, r#"{"reply":"hi there","session_id":42}"#).unwrap();
        assert_eq!(reply.reply, "hi there");
    }

    #[test]
    fn test_reply_from_ok_without_reply_field() {
        let err = reply_from_response(200, r#"{"detail":"not found"}"#).unwrap_err();
        assert!(matches!(err, NovaError::InvalidResponse(_)));
    }

    #[test]
    fn test_reply_from_ok_non_json() {
        assert!(matches!(
            reply_from_response(204, ""),
            Err(NovaError::InvalidResponse(_))
        ));
    }

    // ─── MemoryStorage ───────────────────────────────────────

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        block_on(async {
            assert!(storage.get("k").await.unwrap().is_none());
            storage.set("k", "v1").await.unwrap();
            storage.set("k", "v2").await.unwrap();
            assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v2"));
        });
    }

    #[test]
    fn test_memory_storage_keys_are_independent() {
        let storage = MemoryStorage::new();
        block_on(async {
            storage.set(CONFIG_STORAGE_KEY, "{}").await.unwrap();
            storage.set(THEME_STORAGE_KEY, "dark").await.unwrap();
            assert_eq!(storage.get(CONFIG_STORAGE_KEY).await.unwrap().as_deref(), Some("{}"));
            assert_eq!(storage.get(THEME_STORAGE_KEY).await.unwrap().as_deref(), Some("dark"));
        });
    }

    // ─── Preferences ─────────────────────────────────────────

    #[test]
    fn test_theme_saved_and_restored() {
        let storage = MemoryStorage::new();
        block_on(async {
            save_theme(&storage, ThemeMode::Light).await.unwrap();
            assert_eq!(storage.get(THEME_STORAGE_KEY).await.unwrap().as_deref(), Some("light"));
            assert_eq!(load_theme(&storage, Some(true)).await, ThemeMode::Light);
        });
    }

    #[test]
    fn test_theme_falls_back_to_system_then_dark() {
        let storage = MemoryStorage::new();
        block_on(async {
            assert_eq!(load_theme(&storage, Some(false)).await, ThemeMode::Light);
            assert_eq!(load_theme(&storage, None).await, ThemeMode::Dark);
            storage.set(THEME_STORAGE_KEY, "sepia").await.unwrap();
            assert_eq!(load_theme(&storage, Some(false)).await, ThemeMode::Light);
        });
    }

    #[test]
    fn test_config_round_trip() {
        let storage = MemoryStorage::new();
        let mut config = ClientConfig::default();
        config.chat.port = 9100;
        block_on(async {
            save_config(&storage, &config).await.unwrap();
            assert_eq!(load_config(&storage).await, config);
        });
    }

    #[test]
    fn test_corrupt_config_uses_default() {
        let storage = MemoryStorage::new();
        block_on(async {
            storage.set(CONFIG_STORAGE_KEY, "{oops").await.unwrap();
            assert_eq!(load_config(&storage).await, ClientConfig::default());
        });
    }
}
