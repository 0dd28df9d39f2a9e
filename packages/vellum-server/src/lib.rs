//! Vellum Server
//!
//! A KV-backed Markdown scratchpad service:
//!
//! 1. **Notes by name**: GET `/{name}` for the editor, POST the text back
//!    to save. First non-empty save creates the note, an empty save
//!    deletes it. Content is encrypted at rest with a key derived from
//!    the note's own storage path.
//!
//! 2. **Password gate**: a per-note salted-digest password that clients
//!    check and verify before showing a note. Server-verified but
//!    client-enforced; it never blocks a content read by itself.
//!
//! 3. **Share snapshots**: immutable frozen copies of rendered notes
//!    under client-minted ids, with a visit counter.
//!
//! Storage is a single flat KV namespace behind [`kv::KvStore`]; the
//! in-memory and SQLite backends are interchangeable.

pub mod error;
pub mod extract;
pub mod kv;
pub mod note;
pub mod pages;
pub mod password;
pub mod response;
pub mod share;
pub mod state;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the HTTP router over the given state.
///
/// Static routes win over the note-name capture, so `share` and `health`
/// are not usable as note names.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    // Wire bodies run larger than the content they carry (form escapes,
    // JSON quoting); the hard cap sits above both content caps so the
    // handlers' own size checks answer first.
    let body_limit = state.config.max_note_bytes.max(state.config.max_snapshot_bytes) * 2;

    Router::new()
        .route("/", get(note::api::root_redirect))
        .route("/health", get(health_handler))
        .route(
            "/share/:share_id",
            post(share::api::create_share).get(share::api::view_share),
        )
        .route(
            "/:note_name",
            get(note::api::view_note).post(note::api::save_note),
        )
        .route(
            "/:note_name/password-check",
            get(password::api::password_check),
        )
        .route(
            "/:note_name/password",
            post(password::api::set_password).delete(password::api::remove_password),
        )
        .route(
            "/:note_name/password-verify",
            post(password::api::verify_password),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "vellum-server",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.backend,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
