//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod link_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod skill_repo;

pub use link_repo::LinkRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
