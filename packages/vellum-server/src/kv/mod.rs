//! # KV Storage Boundary
//!
//! Everything the service persists (sealed note blobs, password records,
//! share snapshots) lives in one flat string→string namespace behind the
//! [`KvStore`] trait. Stores receive the handle at construction; nothing
//! reads a global.
//!
//! Single-key operations are atomic in both backends. There are no
//! transactions and no compare-and-swap; callers that read-modify-write
//! accept lost updates.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKv;
pub use sqlite::SqliteKv;

/// Result type alias for KV operations
pub type KvResult<T> = std::result::Result<T, KvError>;

/// Error from a KV backend
#[derive(Error, Debug)]
pub enum KvError {
    /// Backend-specific failure
    #[error("KV backend error: {0}")]
    Backend(String),
}

/// String-keyed, string-valued persistent storage.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: &str) -> KvResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> KvResult<()>;

    /// Name of the backend, for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}
