//! Reverse proxy to the external sign-prediction service.
//!
//! The service is an opaque collaborator: a separate process that turns a
//! base64 image (alphabet) or frame sequence (word) into a label. Bodies are
//! forwarded verbatim and the upstream JSON is returned as-is, so this layer
//! never inspects or validates the inference payloads.

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /predict/alphabet -- single base64 image, `{"prediction": "..."}` back.
pub async fn alphabet(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Value>)> {
    forward(&state, user, "predict/alphabet", body).await
}

/// POST /predict/word -- ordered base64 frames, `{"prediction": "..."}` back.
pub async fn word(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Value>)> {
    forward(&state, user, "predict/word", body).await
}

/// Forward a JSON body upstream and pass the response straight back,
/// preserving the upstream status code.
async fn forward(
    state: &AppState,
    user: AuthUser,
    path: &str,
    body: Value,
) -> AppResult<(StatusCode, Json<Value>)> {
    let url = format!(
        "{}/{path}",
        state.config.predict_service_url.trim_end_matches('/')
    );

    tracing::debug!(user_id = user.user_id, %url, "Proxying prediction request");

    let upstream = state.http.post(&url).json(&body).send().await?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let json: Value = upstream.json().await?;

    Ok((status, Json(json)))
}
