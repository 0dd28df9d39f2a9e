//! Note feature: the editor surface and content persistence.
//!
//! Notes are created implicitly by their first non-empty save and deleted
//! by saving empty text; there is no separate create or delete call. The
//! content that reaches the KV store is always a sealed blob, never
//! plaintext.
//!
//! ## Storage
//!
//! One KV entry per note under `_tmp/{name}`, holding
//! `base64(nonce ‖ ciphertext ‖ tag)` keyed off the entry's own path.

pub mod api;
pub mod store;

pub use store::NoteStore;
