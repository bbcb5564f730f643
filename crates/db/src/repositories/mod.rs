mod progress_repo;
mod user_repo;

pub use progress_repo::ProgressRepo;
pub use user_repo::UserRepo;
