//! Progress entity model.

use serde::Serialize;
use signbridge_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full progress row from the `progress` table.
///
/// Serializes camelCase because the browser client consumes it directly.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub user_id: DbId,
    pub level: i32,
    pub score: i64,
    pub completed_lessons: Vec<String>,
    pub achievements: Vec<String>,
    pub last_active_at: Timestamp,
}
