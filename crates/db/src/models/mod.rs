pub mod progress;
pub mod user;
