//! Note read/save API handlers.
//!
//! - `GET  /` redirects to a fresh note name
//! - `GET  /:note_name` serves the editor page, or plaintext for `?raw`
//!   and CLI clients
//! - `POST /:note_name` saves the note text; empty text deletes the note
//!
//! Responses on this surface are pages and plain text, not the JSON
//! envelope; this is the part of the service people hit with a browser
//! or pipe curl into.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::ServiceError;
use crate::extract::{fresh_name_redirect, NoteName};
use crate::pages;
use crate::state::AppState;

/// User-agent prefixes that get plaintext without asking for `?raw`.
const CLI_USER_AGENTS: &[&str] = &["curl", "wget", "httpie", "fetch"];

#[derive(Deserialize)]
pub struct ViewQuery {
    /// Present (with any value, including none) when plaintext is wanted
    raw: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /
///
/// There is no index; the root hands out a fresh note to start typing in.
pub async fn root_redirect() -> Response {
    fresh_name_redirect()
}

/// GET /:note_name
///
/// Browsers get the editor page with the content embedded. `?raw` or a
/// CLI user agent gets the plaintext itself, 404 when nothing is stored.
/// A stored blob that fails to decrypt reads as "nothing stored".
pub async fn view_note(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
    Query(query): Query<ViewQuery>,
    headers: HeaderMap,
) -> Response {
    let content = match state.notes.load(&note_name).await {
        Ok(content) => content,
        Err(ServiceError::Decryption(detail)) => {
            tracing::warn!(
                note = note_name.as_str(),
                detail = detail.as_str(),
                "Stored content failed to decrypt; serving empty"
            );
            None
        }
        Err(err) => return internal_error(err),
    };

    if query.raw.is_some() || is_cli_client(&headers) {
        return match content {
            Some(text) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response(),
            None => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        };
    }

    pages::editor_page(&note_name, content.as_deref().unwrap_or("")).into_response()
}

/// POST /:note_name
///
/// The body is the note text: a form-encoded `text` field from the
/// editor, or the raw body verbatim from everything else. Empty or
/// whitespace-only text deletes the note (200); anything else saves
/// it (204).
pub async fn save_note(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
    headers: HeaderMap,
    body: String,
) -> Response {
    if body.len() > state.config.max_note_bytes {
        return (StatusCode::PAYLOAD_TOO_LARGE, "Note too large").into_response();
    }

    let text = extract_text(&headers, &body);

    if text.trim().is_empty() {
        if let Err(err) = state.notes.delete(&note_name).await {
            return internal_error(err);
        }
        tracing::info!(note = note_name.as_str(), "Note deleted");
        return (StatusCode::OK, "Note will be deleted").into_response();
    }

    match state.notes.save(&note_name, &text).await {
        Ok(()) => {
            tracing::info!(note = note_name.as_str(), bytes = text.len(), "Note saved");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => internal_error(err),
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn is_cli_client(headers: &HeaderMap) -> bool {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    CLI_USER_AGENTS
        .iter()
        .any(|prefix| user_agent.starts_with(prefix))
}

/// Pull the note text out of a save body.
///
/// Editor saves arrive as `application/x-www-form-urlencoded` with a
/// `text` field (`+` for spaces, percent-escapes); anything else is taken
/// verbatim. A form body without a `text` field counts as empty.
fn extract_text(headers: &HeaderMap, body: &str) -> String {
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    if is_form || body.starts_with("text=") {
        if let Some(encoded) = body.split('&').find_map(|pair| pair.strip_prefix("text=")) {
            let spaced = encoded.replace('+', " ");
            return match urlencoding::decode(&spaced) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => spaced,
            };
        }
        if is_form {
            return String::new();
        }
    }

    body.to_string()
}

fn internal_error(err: ServiceError) -> Response {
    tracing::error!(error = %err, "Note request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
}

// ── Tests ────────────────────────────────────────────────────────────────────
