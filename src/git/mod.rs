//! Git operations abstraction layer
//!
//! Branch versioning only needs two facts from source control: the name of
//! the checked-out branch and the commit HEAD points at. The [Repository]
//! trait exposes exactly those, with two implementations:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use branch_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let branch = repo.current_branch_name()?;
//! let head = repo.resolve_head()?;
//! println!("{} at {}", branch, head);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read access to the repository the build runs in
///
/// ## Error Handling
///
/// Implementations map underlying failures (like `git2::Error`) to
/// [crate::error::BranchVersionError::Repository] or
/// [crate::error::BranchVersionError::Git].
pub trait Repository {
    /// Name of the checked-out branch
    ///
    /// When HEAD is detached there is no branch, and the full id of the
    /// commit HEAD points at is returned instead.
    fn current_branch_name(&self) -> Result<String>;

    /// Full hex id of the commit HEAD points at
    ///
    /// # Returns
    /// * `Ok(String)` - 40 character commit id
    /// * `Err` - If HEAD does not point at a commit (e.g. an empty repository)
    fn resolve_head(&self) -> Result<String>;
}
