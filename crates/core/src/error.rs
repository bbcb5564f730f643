/// Domain-level error taxonomy.
///
/// Each variant maps to exactly one HTTP status in the API layer; the
/// mapping lives in `signbridge_api::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Username or email collides with an existing identity.
    #[error("Username or email already exists")]
    Duplicate,

    /// Login failed. Deliberately carries no detail: an unknown username and
    /// a wrong password must be indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, tampered with, or expired.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// The level-2 unlock precondition does not hold.
    #[error("Level 2 requires {required} points, current score is {current}")]
    UnlockDenied { required: i64, current: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
