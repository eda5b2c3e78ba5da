//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod enrollment_repo;
pub mod program_repo;
pub mod stats_repo;

pub use client_repo::ClientRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use program_repo::ProgramRepo;
pub use stats_repo::StatsRepo;
