use crate::error::{BranchVersionError, Result};
use git2::{Repository as Git2Repo, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::Path;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository with our trait interface
///
/// The underlying handle is released when the wrapper is dropped.
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the repository containing `path`, searching upwards.
    ///
    /// The search honours the same environment as the git command line,
    /// including `GIT_DIR` and `GIT_CEILING_DIRECTORIES`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::discover(
            path.as_ref(),
            RepositoryOpenFlags::FROM_ENV,
            std::iter::empty::<&OsStr>(),
        )
    }

    fn discover<I, O>(path: &Path, flags: RepositoryOpenFlags, ceiling_dirs: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
        O: AsRef<OsStr>,
    {
        let repo = Git2Repo::open_ext(path, flags, ceiling_dirs).map_err(|e| {
            BranchVersionError::repository(format!(
                "No git repository found at or above '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn current_branch_name(&self) -> Result<String> {
        if self.repo.head_detached()? {
            return self.resolve_head();
        }

        // HEAD is symbolic; this also covers a branch with no commits yet
        let head = self.repo.find_reference("HEAD")?;
        let target = head
            .symbolic_target()
            .ok_or_else(|| BranchVersionError::repository("HEAD is not a symbolic reference"))?;

        Ok(target
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(target)
            .to_string())
    }

    fn resolve_head(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| {
            BranchVersionError::repository(format!("Cannot resolve HEAD: {}", e))
        })?;
        let commit = head.peel_to_commit().map_err(|e| {
            BranchVersionError::repository(format!("HEAD does not point at a commit: {}", e))
        })?;

        Ok(commit.id().to_string())
    }
}
