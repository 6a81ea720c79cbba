use crate::error::{BranchVersionError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: Option<String>,
    head: Option<String>,
}

impl MockRepository {
    /// Create a mock checked out on `branch` at commit `head`
    pub fn new(branch: impl Into<String>, head: impl Into<String>) -> Self {
        MockRepository {
            branch: Some(branch.into()),
            head: Some(head.into()),
        }
    }

    /// Create a mock with HEAD detached at `head`
    pub fn detached(head: impl Into<String>) -> Self {
        let head = head.into();
        MockRepository {
            branch: Some(head.clone()),
            head: Some(head),
        }
    }

    /// Create a mock whose queries all fail
    pub fn broken() -> Self {
        MockRepository {
            branch: None,
            head: None,
        }
    }
}

impl Repository for MockRepository {
    fn current_branch_name(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| BranchVersionError::repository("No branch checked out"))
    }

    fn resolve_head(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| BranchVersionError::repository("HEAD does not point at a commit"))
    }
}
