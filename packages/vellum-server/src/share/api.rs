//! Share snapshot API handlers.
//!
//! - `POST /share/:share_id` freezes rendered content under the id
//! - `GET  /share/:share_id` views the snapshot (bumps the counter)
//!
//! The id is minted client-side; the server never links a share back to
//! its source note.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::store::validate_share_id;
use crate::error::ServiceError;
use crate::pages;
use crate::response::{error_response, json_failure, ApiResponse};
use crate::state::AppState;

// ── Request / Response Types ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    /// Pre-rendered HTML of the note, stored verbatim
    pub content: String,
    /// Client's claim of when the source note was last edited
    pub last_edit_time: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareResponse {
    pub url: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /share/:share_id
///
/// Store a snapshot. Overwrites whatever the id pointed at before; with
/// client-minted ids the server cannot tell a collision from an update.
pub async fn create_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    Json(request): Json<CreateShareRequest>,
) -> Response {
    if !validate_share_id(&share_id) {
        return error_response::<CreateShareResponse>(
            StatusCode::BAD_REQUEST,
            "Share id must be 1-64 alphanumeric characters",
        )
        .into_response();
    }

    if request.content.len() > state.config.max_snapshot_bytes {
        return error_response::<CreateShareResponse>(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Share content too large",
        )
        .into_response();
    }

    match state
        .shares
        .create(&share_id, request.content, request.last_edit_time)
        .await
    {
        Ok(_) => {
            tracing::info!(share = share_id.as_str(), "Share created");
            ApiResponse::success(CreateShareResponse {
                url: format!("/share/{}", share_id),
            })
            .into_response()
        }
        Err(err) => json_failure::<CreateShareResponse>(err).into_response(),
    }
}

/// GET /share/:share_id
///
/// Serve the share page and count the visit. Unknown and malformed ids
/// both read as absent.
pub async fn view_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Response {
    if !validate_share_id(&share_id) {
        return (StatusCode::NOT_FOUND, "Share not found").into_response();
    }

    match state.shares.read(&share_id).await {
        Ok(snapshot) => pages::share_page(&snapshot).into_response(),
        Err(ServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Share not found").into_response()
        }
        Err(err) => {
            tracing::error!(share = share_id.as_str(), error = %err, "Share read failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}
