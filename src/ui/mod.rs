//! User interface module - terminal output.
//!
//! Branch versioning runs unattended inside builds, so there are no prompts;
//! everything here is formatting in `formatter`.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_branch, display_error, display_planned_versions, display_release_profile,
    display_status, display_success, display_version_changes,
};
