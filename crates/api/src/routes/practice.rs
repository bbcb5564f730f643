//! Route definitions for the `/practice` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::practice;
use crate::state::AppState;

/// Routes mounted at `/practice` (requires auth).
///
/// ```text
/// GET /{level}  -> get_level
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{level}", get(practice::get_level))
}
