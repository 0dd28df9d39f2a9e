//! In-memory KV backend.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use super::{KvResult, KvStore};

/// DashMap-backed KV store.
///
/// The default backend when no data directory is configured, and the
/// backend every test runs against. Contents vanish with the process.
#[derive(Clone, Default)]
pub struct MemoryKv {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> KvResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
