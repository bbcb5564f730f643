//! Domain types, error taxonomy, and level-progression rules for SignBridge.
//!
//! This crate is pure: no I/O, no async. The persistence layer
//! (`signbridge-db`) and HTTP surface (`signbridge-api`) build on it.

pub mod error;
pub mod progress;
pub mod types;
