//! Test-support endpoints. Not part of the public catalogue API.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// DELETE /testing/all-data
///
/// Empty the store.
pub async fn delete_all_data(State(state): State<AppState>) -> StatusCode {
    let removed = state.store.clear().await;

    tracing::info!(removed, "All video data cleared");

    StatusCode::NO_CONTENT
}
