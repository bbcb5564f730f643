//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers translate HTTP into repository calls and map errors via
//! [`crate::error::AppError`]; business rules live in `signbridge_core`
//! and in the atomic SQL of `signbridge_db`.

pub mod auth;
pub mod practice;
pub mod predict;
pub mod progress;
