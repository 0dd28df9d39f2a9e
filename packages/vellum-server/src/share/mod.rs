//! Share snapshot feature.
//!
//! A share freezes a rendered note at a moment in time under a
//! client-chosen id. Snapshots are immutable except for their visit
//! counter, are never linked back to the note they came from, and have
//! no delete and no expiry.
//!
//! ## Storage
//!
//! One KV entry per share under `share_{id}`, holding the snapshot JSON
//! (content, create time, last edit time, visit count).

pub mod api;
pub mod store;

pub use store::ShareStore;
