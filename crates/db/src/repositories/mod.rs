//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod prompt_repo;
pub mod run_log_repo;
pub mod test_case_repo;
pub mod user_repo;
pub mod version_repo;

pub use prompt_repo::PromptRepo;
pub use run_log_repo::RunLogRepo;
pub use test_case_repo::TestCaseRepo;
pub use user_repo::UserRepo;
pub use version_repo::VersionRepo;
