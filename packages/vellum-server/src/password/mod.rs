//! Password gate feature.
//!
//! A note can carry one password record; while it exists the client is
//! expected to ask the user before showing the note. The gate is
//! server-verified but client-enforced: nothing here blocks a content
//! read, and "unlocked" exists only in the client's session. The server
//! knows two states, unprotected and protected.
//!
//! ## Storage
//!
//! One KV entry per protected note under `_secure_{sha256(name ‖
//! "_pwd_protected")}`, holding `{"hash", "salt"}` as JSON.

pub mod api;
pub mod store;

pub use store::PasswordStore;
