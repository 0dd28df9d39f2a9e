//! Share snapshot persistence over the KV boundary.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::kv::KvStore;

/// Key prefix for share snapshots
pub const SHARE_KEY_PREFIX: &str = "share_";

/// Maximum accepted share id length
pub const SHARE_ID_MAX_LENGTH: usize = 64;

/// A stored share snapshot.
///
/// Content is the client's pre-rendered HTML, stored verbatim. The
/// timestamps are RFC 3339 strings; `visit_count` is the only field that
/// ever changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSnapshot {
    pub content: String,
    pub create_time: String,
    pub last_edit_time: String,
    pub visit_count: u64,
}

/// Validate a share id.
///
/// Clients mint 8 random alphanumeric characters by convention; the
/// server only insists on 1-64 alphanumerics so the key family stays
/// bounded.
pub fn validate_share_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= SHARE_ID_MAX_LENGTH
        && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn share_key(id: &str) -> String {
    format!("{}{}", SHARE_KEY_PREFIX, id)
}

/// Store for share snapshots.
#[derive(Clone)]
pub struct ShareStore {
    kv: Arc<dyn KvStore>,
}

impl ShareStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Store a snapshot under `id`, overwriting any existing one.
    ///
    /// Ids are client-chosen, so a collision is indistinguishable from an
    /// intentional overwrite; the previous snapshot and its visit count
    /// are simply replaced. `last_edit_time` is the client's claim about
    /// the source note and defaults to the creation instant.
    pub async fn create(
        &self,
        id: &str,
        content: String,
        last_edit_time: Option<String>,
    ) -> ServiceResult<ShareSnapshot> {
        let now = Utc::now().to_rfc3339();
        let snapshot = ShareSnapshot {
            content,
            create_time: now.clone(),
            last_edit_time: last_edit_time.unwrap_or(now),
            visit_count: 0,
        };

        self.kv
            .put(&share_key(id), &serde_json::to_string(&snapshot)?)
            .await?;
        Ok(snapshot)
    }

    /// Read a snapshot, bumping its visit counter.
    ///
    /// The returned snapshot carries the post-increment count. The bump
    /// is a get-modify-put; concurrent reads can lose counts, which is
    /// accepted for a statistic.
    pub async fn read(&self, id: &str) -> ServiceResult<ShareSnapshot> {
        let key = share_key(id);
        let raw = self
            .kv
            .get(&key)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Share".into()))?;

        let mut snapshot: ShareSnapshot = serde_json::from_str(&raw)
            .map_err(|e| ServiceError::Storage(format!("malformed share snapshot: {}", e)))?;

        snapshot.visit_count += 1;
        self.kv
            .put(&key, &serde_json::to_string(&snapshot)?)
            .await?;
        Ok(snapshot)
    }
}
