//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod buddy_repo;
pub mod mentor_repo;
pub mod progress_repo;
pub mod stats_repo;
pub mod submission_repo;
pub mod task_repo;
pub mod topic_repo;
pub mod user_repo;

pub use buddy_repo::BuddyRepo;
pub use mentor_repo::MentorRepo;
pub use progress_repo::ProgressRepo;
pub use stats_repo::StatsRepo;
pub use submission_repo::SubmissionRepo;
pub use task_repo::TaskRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;
