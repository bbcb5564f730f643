//! Level-progression rules.
//!
//! The state over `(level, score)` is derived, never stored: a user at
//! level 1 becomes eligible for level 2 once their score reaches
//! [`LEVEL2_SCORE_THRESHOLD`], and the actual transition happens only
//! through an explicit unlock call (see `ProgressRepo::unlock_level2`).
//! Level 2 is terminal in the current curriculum; level 3 exists only as
//! a data-model placeholder.

use crate::error::CoreError;

/// Score required to unlock level 2.
pub const LEVEL2_SCORE_THRESHOLD: i64 = 30;

/// Level every new progress record starts at.
pub const INITIAL_LEVEL: i32 = 1;

/// Derived position in the level-unlock state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    /// Level 1, score below the unlock threshold.
    Level1,
    /// Level 1, score at or above the threshold; an unlock call will succeed.
    Level2Eligible,
    /// Level 2 or beyond.
    Level2,
}

/// Classify a `(level, score)` pair.
pub fn level_state(level: i32, score: i64) -> LevelState {
    if level >= 2 {
        LevelState::Level2
    } else if score >= LEVEL2_SCORE_THRESHOLD {
        LevelState::Level2Eligible
    } else {
        LevelState::Level1
    }
}

/// Validate a score delta before it is applied.
///
/// Score is monotonically non-decreasing: only additive updates exist, so a
/// negative delta is rejected outright rather than clamped.
pub fn validate_score_delta(delta: i64) -> Result<(), CoreError> {
    if delta < 0 {
        return Err(CoreError::Validation(
            "Score delta must be non-negative".into(),
        ));
    }
    Ok(())
}

/// Check the unlock precondition for a record that is still at level 1.
pub fn check_unlock(current_score: i64) -> Result<(), CoreError> {
    if current_score < LEVEL2_SCORE_THRESHOLD {
        return Err(CoreError::UnlockDenied {
            required: LEVEL2_SCORE_THRESHOLD,
            current: current_score,
        });
    }
    Ok(())
}
