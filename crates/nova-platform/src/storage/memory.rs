//! In-memory storage backend.
//! Used in tests and when localStorage is blocked; lost on reload.

use std::cell::RefCell;
use std::collections::BTreeMap;
use async_trait::async_trait;
use nova_core::ports::StoragePort;
use nova_types::Result;

#[derive(Default)]
pub struct MemoryStorage {
    data: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
