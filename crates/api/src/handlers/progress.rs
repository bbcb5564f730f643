//! Handlers for the `/progress` resource.
//!
//! Score accumulation and the level-2 unlock are deliberately separate
//! endpoints: the unlock has its own failure mode (the threshold check) and
//! the client calls them at different points in its flow.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use signbridge_core::error::CoreError;
use signbridge_core::progress::{check_unlock, validate_score_delta};
use signbridge_db::models::progress::Progress;
use signbridge_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /progress`. At least one known field must be
/// present; unrecognized fields are ignored, matching the browser client's
/// loose payloads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    /// Non-negative score delta to add.
    pub score: Option<i64>,
    /// Lesson id to record as completed (idempotent).
    pub completed_lesson: Option<String>,
    /// Achievement id to record (idempotent).
    pub achievement: Option<String>,
}

/// Response wrapper: every progress endpoint returns `{progress: {...}}`.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: Progress,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /progress
pub async fn get_progress(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ProgressResponse>> {
    let progress = ProgressRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(not_found())?;
    Ok(Json(ProgressResponse { progress }))
}

/// POST /progress
///
/// Apply whichever mutations the body carries: score delta first, then
/// lesson completion, then achievement. Each mutation is a single atomic
/// UPDATE, so concurrent calls for the same user cannot lose a delta.
pub async fn update_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProgressRequest>,
) -> AppResult<Json<ProgressResponse>> {
    if input.score.is_none() && input.completed_lesson.is_none() && input.achievement.is_none() {
        return Err(CoreError::Validation(
            "At least one of score, completedLesson, achievement is required".into(),
        )
        .into());
    }

    let mut progress: Option<Progress> = None;

    if let Some(delta) = input.score {
        validate_score_delta(delta)?;
        progress = Some(
            ProgressRepo::add_score(&state.pool, user.user_id, delta)
                .await?
                .ok_or(not_found())?,
        );
        tracing::debug!(user_id = user.user_id, delta, "Score added");
    }

    if let Some(lesson_id) = &input.completed_lesson {
        progress = Some(
            ProgressRepo::record_lesson(&state.pool, user.user_id, lesson_id)
                .await?
                .ok_or(not_found())?,
        );
    }

    if let Some(achievement_id) = &input.achievement {
        progress = Some(
            ProgressRepo::record_achievement(&state.pool, user.user_id, achievement_id)
                .await?
                .ok_or(not_found())?,
        );
    }

    // The emptiness check above guarantees at least one branch ran.
    let progress = progress.ok_or_else(|| {
        AppError::Core(CoreError::Internal("No progress mutation applied".into()))
    })?;

    Ok(Json(ProgressResponse { progress }))
}

/// POST /progress/unlock-level2
///
/// Explicit `Level2Eligible -> Level2` transition. The repository runs a
/// compare-and-swap; when it misses, the current record decides the error:
/// absent is 404, already unlocked is an idempotent success, otherwise the
/// score was short and the response names the shortfall.
pub async fn unlock_level2(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ProgressResponse>> {
    if let Some(progress) = ProgressRepo::unlock_level2(&state.pool, user.user_id).await? {
        tracing::info!(user_id = user.user_id, "Level 2 unlocked");
        return Ok(Json(ProgressResponse { progress }));
    }

    let progress = ProgressRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(not_found())?;

    if progress.level >= 2 {
        // A concurrent (or repeated) unlock already won; report success
        // rather than punishing the second caller.
        return Ok(Json(ProgressResponse { progress }));
    }

    check_unlock(progress.score)?;

    // The swap missed but the snapshot satisfies the guard: a score update
    // landed in between. Retry once; either we win or a racer already did.
    if let Some(progress) = ProgressRepo::unlock_level2(&state.pool, user.user_id).await? {
        return Ok(Json(ProgressResponse { progress }));
    }
    let progress = ProgressRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(not_found())?;
    Ok(Json(ProgressResponse { progress }))
}

fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Progress record",
    })
}
