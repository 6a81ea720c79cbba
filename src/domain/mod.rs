//! Domain logic - pure versioning rules independent of git and file I/O

pub mod branch;
pub mod gav;
pub mod project;
pub mod version;

pub use branch::{classify, BranchClass, BranchState};
pub use gav::Gav;
pub use project::Project;
pub use version::{release_version, sanitize_branch_name, VersionRange};
