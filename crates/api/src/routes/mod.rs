pub mod auth;
pub mod health;
pub mod practice;
pub mod predict;
pub mod progress;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /health                      liveness + db probe (public)
///
/// /auth/register               create identity + progress (public)
/// /auth/login                  authenticate (public)
///
/// /progress                    get snapshot, apply mutations
/// /progress/unlock-level2      explicit level-2 unlock
///
/// /practice/{level}            static lesson catalog
///
/// /predict/alphabet            proxy to prediction service
/// /predict/word                proxy to prediction service
/// ```
///
/// Everything below `/auth` and `/health` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/progress", progress::router())
        .nest("/practice", practice::router())
        .nest("/predict", predict::router())
}
