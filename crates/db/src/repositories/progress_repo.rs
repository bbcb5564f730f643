//! Repository for the `progress` table.
//!
//! Every mutation is a single UPDATE statement so Postgres row locking
//! serializes concurrent writers for one user: two simultaneous score
//! updates both land, and two simultaneous unlock attempts cannot
//! double-transition. Different users touch different rows and never
//! contend.

use signbridge_core::progress::LEVEL2_SCORE_THRESHOLD;
use signbridge_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::progress::Progress;

const COLUMNS: &str = "user_id, level, score, completed_lessons, achievements, last_active_at";

/// Provides atomic per-user operations on progress records.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Insert the default record (level 1, score 0, empty sets) for a user.
    ///
    /// Runs inside the registration transaction so user and progress row
    /// are created atomically.
    pub async fn create_default(
        executor: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Progress, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress (user_id)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .fetch_one(executor)
            .await
    }

    /// Read-only snapshot of a user's progress.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM progress WHERE user_id = $1");
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Add a non-negative delta to the user's score.
    ///
    /// The increment happens in SQL (`score = score + $2`), not as
    /// read-then-write in the application, so concurrent calls for the same
    /// user cannot lose an update. Returns `None` if no record exists.
    pub async fn add_score(
        pool: &PgPool,
        user_id: DbId,
        delta: i64,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!(
            "UPDATE progress
             SET score = score + $2, last_active_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Idempotently add a lesson id to the completed set.
    ///
    /// Recording an already-present lesson leaves the set unchanged but still
    /// counts as a successful mutation, so `last_active_at` is bumped either
    /// way.
    pub async fn record_lesson(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: &str,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!(
            "UPDATE progress
             SET completed_lessons = CASE
                     WHEN $2 = ANY(completed_lessons) THEN completed_lessons
                     ELSE array_append(completed_lessons, $2)
                 END,
                 last_active_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Idempotently add an achievement id to the achievement set.
    pub async fn record_achievement(
        pool: &PgPool,
        user_id: DbId,
        achievement_id: &str,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!(
            "UPDATE progress
             SET achievements = CASE
                     WHEN $2 = ANY(achievements) THEN achievements
                     ELSE array_append(achievements, $2)
                 END,
                 last_active_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(achievement_id)
            .fetch_optional(pool)
            .await
    }

    /// Compare-and-swap transition to level 2.
    ///
    /// Succeeds only while the record is still at level 1 with enough score;
    /// the guard lives in the WHERE clause so racing unlockers cannot both
    /// transition. Returns `None` when the guard fails -- the caller
    /// re-reads the record to report why (missing, already unlocked, or
    /// score too low).
    pub async fn unlock_level2(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!(
            "UPDATE progress
             SET level = 2, last_active_at = NOW()
             WHERE user_id = $1 AND level = 1 AND score >= $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(LEVEL2_SCORE_THRESHOLD)
            .fetch_optional(pool)
            .await
    }
}
