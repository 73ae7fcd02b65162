//! Mounted at `/testing`.

use axum::routing::delete;
use axum::Router;

use crate::handlers::testing;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/all-data", delete(testing::delete_all_data))
}
