//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use signbridge_core::error::CoreError;
use signbridge_db::models::user::{CreateUser, User, UserInfo};
use signbridge_db::repositories::{ProgressRepo, UserRepo};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LEN};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a new identity plus its default progress record (one transaction:
/// either both rows exist afterwards or neither does), and return a fresh
/// session token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_registration(&input)?;

    // Friendly duplicate checks up front; the unique constraints inside the
    // transaction remain the authority under races.
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
        || UserRepo::find_by_email(&state.pool, &input.email)
            .await?
            .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing error: {e}"))))?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;
    ProgressRepo::create_default(&mut *tx, user.id).await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = build_auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/login
///
/// Authenticate with username + password. An unknown username and a wrong
/// password produce the identical error so callers cannot enumerate
/// accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password verification error: {e}"))))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    tracing::info!(user_id = user.id, "User logged in");

    let response = build_auth_response(&state, &user)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_registration(input: &RegisterRequest) -> Result<(), AppError> {
    if input.username.trim().is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()).into());
    }
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(CoreError::Validation("A valid email is required".into()).into());
    }
    if input.password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ))
        .into());
    }
    Ok(())
}

/// Sign a session token and build the `{token, user}` response body.
fn build_auth_response(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Token generation error: {e}"))))?;

    Ok(AuthResponse {
        token,
        user: UserInfo::from(user),
    })
}
