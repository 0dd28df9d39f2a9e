//! SQLite KV backend.
//!
//! A single `kv` table in WAL mode. The connection sits behind a mutex;
//! every operation is one statement, so each call is atomic on its key.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection};

use super::{KvError, KvResult, KvStore};

const INIT_SCHEMA: &str = "
PRAGMA journal_mode = WAL;
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

/// SQLite-backed KV store, selected when a data directory is configured.
#[derive(Clone)]
pub struct SqliteKv {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKv {
    /// Open or create the database file at `path`.
    pub fn open(path: &Path) -> KvResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| KvError::Backend(format!("failed to open database: {}", e)))?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database (useful for testing).
    pub fn open_in_memory() -> KvResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| KvError::Backend(format!("failed to create in-memory database: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> KvResult<Self> {
        conn.execute_batch(INIT_SCHEMA)
            .map_err(|e| KvError::Backend(format!("failed to initialize schema: {}", e)))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl KvStore for SqliteKv {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let conn = self.conn.lock();
        let result: rusqlite::Result<String> = conn.query_row(
            "SELECT value FROM kv WHERE key = ?",
            params![key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(KvError::Backend(format!("failed to read key: {}", e))),
        }
    }

    async fn put(&self, key: &str, value: &str) -> KvResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)",
            params![key, value],
        )
        .map_err(|e| KvError::Backend(format!("failed to write key: {}", e)))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> KvResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?", params![key])
            .map_err(|e| KvError::Backend(format!("failed to delete key: {}", e)))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
