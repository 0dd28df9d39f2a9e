//! Shared server state and configuration.

use std::sync::Arc;

use crate::kv::KvStore;
use crate::note::store::NoteStore;
use crate::password::store::PasswordStore;
use crate::share::store::ShareStore;

// ── Configuration ────────────────────────────────────────────────────────────

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Data directory for the SQLite backend (None = in-memory)
    pub data_dir: Option<String>,
    /// Maximum accepted note body size in bytes
    pub max_note_bytes: usize,
    /// Maximum accepted share snapshot content size in bytes
    pub max_snapshot_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: None,
            max_note_bytes: 1024 * 1024,
            max_snapshot_bytes: 2 * 1024 * 1024,
        }
    }
}

// ── Application State ────────────────────────────────────────────────────────

/// Shared application state.
///
/// The KV handle is injected once here and fans out to the feature
/// stores; handlers reach everything through this struct.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub notes: NoteStore,
    pub passwords: PasswordStore,
    pub shares: ShareStore,
    /// Backend label for logs and the health endpoint
    pub backend: &'static str,
}

impl AppState {
    pub fn new(config: ServerConfig, kv: Arc<dyn KvStore>) -> Self {
        Self {
            backend: kv.backend_name(),
            notes: NoteStore::new(kv.clone()),
            passwords: PasswordStore::new(kv.clone()),
            shares: ShareStore::new(kv),
            config,
        }
    }
}
