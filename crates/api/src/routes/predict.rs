//! Route definitions for the `/predict` proxy.

use axum::routing::post;
use axum::Router;

use crate::handlers::predict;
use crate::state::AppState;

/// Routes mounted at `/predict` (requires auth).
///
/// ```text
/// POST /alphabet  -> proxy to prediction service
/// POST /word      -> proxy to prediction service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alphabet", post(predict::alphabet))
        .route("/word", post(predict::word))
}
