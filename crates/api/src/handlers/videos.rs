//! Handlers for the `/videos` resource.
//!
//! Bodies are taken as raw JSON and run through the validator before the
//! store is touched, so a rejected request never mutates anything.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use videohub_core::error::CoreError;
use videohub_core::types::VideoId;
use videohub_core::validation::{self, FieldError};
use videohub_core::video::Video;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the `{id}` path segment. An id that is not an integer cannot match
/// any video, so it is reported as not found.
fn parse_video_id(raw: &str) -> AppResult<VideoId> {
    raw.parse()
        .map_err(|_| AppError::Core(CoreError::video_not_found(raw)))
}

fn rejected(errors: Vec<FieldError>) -> AppError {
    tracing::debug!(error_count = errors.len(), "Video payload rejected");
    AppError::Core(CoreError::Validation(errors))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /videos
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    Json(state.store.list().await)
}

/// GET /videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Video>> {
    let id = parse_video_id(&raw_id)?;
    let video = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| CoreError::video_not_found(id))?;

    Ok(Json(video))
}

/// POST /videos
///
/// Accepts `{title, author, availableResolutions}`; returns 201 with the
/// stored video.
pub async fn create_video(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body?;
    let input = validation::validate_create(&body).map_err(rejected)?;

    let video = state.store.create(input).await;

    tracing::info!(video_id = video.id, title = %video.title, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /videos/{id}
///
/// An empty object is answered with 204 before anything else is checked.
/// Otherwise the body is validated first and the id looked up second, so an
/// invalid body for an unknown id is a 400, not a 404.
pub async fn update_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(body) = body?;
    if validation::is_empty_body(&body) {
        tracing::debug!(video_id = %raw_id, "Empty update body, nothing to change");
        return Ok(StatusCode::NO_CONTENT);
    }

    let input = validation::validate_update(&body).map_err(rejected)?;
    let id = parse_video_id(&raw_id)?;

    let video = state
        .store
        .update(id, input)
        .await
        .ok_or_else(|| CoreError::video_not_found(id))?;

    tracing::info!(video_id = video.id, title = %video.title, "Video updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_video_id(&raw_id)?;
    if !state.store.delete(id).await {
        return Err(CoreError::video_not_found(id).into());
    }

    tracing::info!(video_id = id, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}
