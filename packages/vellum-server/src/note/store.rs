//! Note content persistence over the KV boundary.

use std::sync::Arc;

use vellum_core::crypto::content;
use vellum_core::note;

use crate::error::ServiceResult;
use crate::kv::KvStore;

/// Store for note content.
///
/// Seals on the way in, opens on the way out; callers only ever see
/// plaintext. Names are assumed validated by the HTTP layer.
#[derive(Clone)]
pub struct NoteStore {
    kv: Arc<dyn KvStore>,
}

impl NoteStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Load and decrypt a note's content.
    ///
    /// `Ok(None)` means nothing is stored. A stored blob that fails to
    /// open surfaces as [`ServiceError::Decryption`]; the caller decides
    /// whether that reads as "empty" or as a hard failure.
    ///
    /// [`ServiceError::Decryption`]: crate::error::ServiceError::Decryption
    pub async fn load(&self, name: &str) -> ServiceResult<Option<String>> {
        let key = note::storage_key(name);
        let blob = match self.kv.get(&key).await? {
            Some(blob) => blob,
            None => return Ok(None),
        };
        let text = content::open_content(&key, &blob)?;
        Ok(Some(text))
    }

    /// Encrypt and store a note's content.
    pub async fn save(&self, name: &str, text: &str) -> ServiceResult<()> {
        let key = note::storage_key(name);
        let blob = content::seal_content(&key, text)?;
        self.kv.put(&key, &blob).await?;
        Ok(())
    }

    /// Delete a note's content. Deleting an absent note is not an error.
    pub async fn delete(&self, name: &str) -> ServiceResult<()> {
        self.kv.delete(&note::storage_key(name)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::kv::MemoryKv;

    fn test_store() -> (Arc<MemoryKv>, NoteStore) {
        let kv = Arc::new(MemoryKv::new());
        let store = NoteStore::new(kv.clone());
        (kv, store)
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let (_, store) = test_store();
        store.save("abc12", "# My note\n\ntext").await.unwrap();
        assert_eq!(
            store.load("abc12").await.unwrap(),
            Some("# My note\n\ntext".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let (_, store) = test_store();
        assert_eq!(store.load("nope1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_content() {
        let (_, store) = test_store();
        store.save("abc12", "text").await.unwrap();
        store.delete("abc12").await.unwrap();
        assert_eq!(store.load("abc12").await.unwrap(), None);

        // Absent delete is fine
        store.delete("abc12").await.unwrap();
    }

    #[tokio::test]
    async fn test_stored_value_is_not_plaintext() {
        let (kv, store) = test_store();
        store.save("abc12", "visible text").await.unwrap();

        let raw = kv.get("_tmp/abc12").await.unwrap().unwrap();
        assert!(!raw.contains("visible text"));
        assert_ne!(raw, "visible text");
    }

    #[tokio::test]
    async fn test_corrupted_blob_reports_decryption_failure() {
        let (kv, store) = test_store();
        kv.put("_tmp/abc12", "not a sealed blob").await.unwrap();

        let result = store.load("abc12").await;
        assert!(matches!(result, Err(ServiceError::Decryption(_))));
    }

    #[tokio::test]
    async fn test_notes_do_not_share_keys() {
        let (kv, store) = test_store();
        store.save("nota1", "shared text").await.unwrap();

        // Splice note A's blob under note B's key; B's path-derived key
        // cannot open it
        let blob = kv.get("_tmp/nota1").await.unwrap().unwrap();
        kv.put("_tmp/notb1", &blob).await.unwrap();

        let result = store.load("notb1").await;
        assert!(matches!(result, Err(ServiceError::Decryption(_))));
    }
}
