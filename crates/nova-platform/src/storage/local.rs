//! Browser localStorage backend.
//! Synchronous under the hood; the async port is kept for uniformity.

use async_trait::async_trait;
use web_sys::Storage;

use nova_core::ports::StoragePort;
use nova_types::{NovaError, Result};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails with `JsInterop` when there is no window or the browser
    /// refuses access (private mode, disabled cookies).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| NovaError::JsInterop("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| NovaError::JsInterop(format!("{:?}", e)))?
            .ok_or_else(|| NovaError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| NovaError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| NovaError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
