//! Route definitions for the `/progress` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress` (all require auth).
///
/// ```text
/// GET  /                -> get_progress
/// POST /                -> update_progress
/// POST /unlock-level2   -> unlock_level2
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(progress::get_progress).post(progress::update_progress))
        .route("/unlock-level2", post(progress::unlock_level2))
}
