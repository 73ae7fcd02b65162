pub mod health;
pub mod testing;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                  list, create
/// /videos/{id}             get, update, delete
///
/// /testing/all-data        reset (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", videos::router())
        .nest("/testing", testing::router())
}
