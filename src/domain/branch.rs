use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;

/// The checked-out branch and the commit HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchState {
    pub name: String,
    pub head_commit: String,
}

impl BranchState {
    /// Create a branch state from a branch name and head commit id
    pub fn new(name: impl Into<String>, head_commit: impl Into<String>) -> Self {
        BranchState {
            name: name.into(),
            head_commit: head_commit.into(),
        }
    }

    /// Read the current branch and head commit from a repository
    pub fn read<R: Repository + ?Sized>(repo: &R) -> Result<Self> {
        let name = repo.current_branch_name()?;
        log::debug!("branch: {}", name);
        let head_commit = repo.resolve_head()?;
        log::debug!("commit: {}", head_commit);

        Ok(BranchState { name, head_commit })
    }

    /// A detached HEAD reports the commit id in place of a branch name
    pub fn is_detached(&self) -> bool {
        self.name == self.head_commit
    }
}

impl fmt::Display for BranchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_detached() {
            write!(f, "(HEAD detached at {})", self.head_commit)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// How the current branch relates to the release conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchClass {
    /// Not on a named branch
    Detached,
    /// The main release branch (`master` by default)
    MainRelease,
    /// A maintenance branch such as `support/1.x`
    ReleaseBranch,
    /// Any other branch
    SnapshotBranch,
}

impl BranchClass {
    /// Main and maintenance branches produce release versions
    pub fn is_release(&self) -> bool {
        matches!(self, BranchClass::MainRelease | BranchClass::ReleaseBranch)
    }
}

impl fmt::Display for BranchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchClass::Detached => write!(f, "detached"),
            BranchClass::MainRelease => write!(f, "main release"),
            BranchClass::ReleaseBranch => write!(f, "release"),
            BranchClass::SnapshotBranch => write!(f, "snapshot"),
        }
    }
}

/// Classify a branch; the first matching rule wins:
/// detached HEAD, main release branch (case-insensitive), release prefix
/// (literal `starts_with`), otherwise snapshot.
pub fn classify(state: &BranchState, config: &Config) -> BranchClass {
    if state.is_detached() {
        BranchClass::Detached
    } else if state
        .name
        .eq_ignore_ascii_case(&config.main_release_branch)
    {
        BranchClass::MainRelease
    } else if config
        .release_branch_prefixes
        .iter()
        .any(|prefix| state.name.starts_with(prefix.as_str()))
    {
        BranchClass::ReleaseBranch
    } else {
        BranchClass::SnapshotBranch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    const HEAD: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

    #[test]
    fn test_master_branch() {
        let state = BranchState::new("master", HEAD);
        assert_eq!(classify(&state, &Config::default()), BranchClass::MainRelease);
    }

    #[test]
    fn test_main_branch_is_case_insensitive() {
        let state = BranchState::new("MASTER", HEAD);
        assert_eq!(classify(&state, &Config::default()), BranchClass::MainRelease);
    }

    #[test]
    fn test_support_prefixes() {
        let config = Config::default();
        for name in ["support/1.x", "support-2.0"] {
            let state = BranchState::new(name, HEAD);
            assert_eq!(classify(&state, &config), BranchClass::ReleaseBranch);
        }
    }

    #[test]
    fn test_prefix_match_is_literal() {
        let config = Config {
            release_branch_prefixes: vec!["release.".to_string()],
            ..Config::default()
        };
        assert_eq!(
            classify(&BranchState::new("release.1", HEAD), &config),
            BranchClass::ReleaseBranch
        );
        assert_eq!(
            classify(&BranchState::new("releaseX1", HEAD), &config),
            BranchClass::SnapshotBranch
        );
    }

    #[test]
    fn test_develop_branch() {
        let state = BranchState::new("develop", HEAD);
        let class = classify(&state, &Config::default());
        assert_eq!(class, BranchClass::SnapshotBranch);
        assert!(!class.is_release());
    }

    #[test]
    fn test_detached_takes_precedence() {
        let config = Config {
            main_release_branch: HEAD.to_string(),
            release_branch_prefixes: vec![HEAD[..4].to_string()],
            ..Config::default()
        };
        let state = BranchState::new(HEAD, HEAD);
        assert_eq!(classify(&state, &config), BranchClass::Detached);
    }

    #[test]
    fn test_custom_main_branch() {
        let config = Config {
            main_release_branch: "main".to_string(),
            ..Config::default()
        };
        assert_eq!(
            classify(&BranchState::new("main", HEAD), &config),
            BranchClass::MainRelease
        );
        assert_eq!(
            classify(&BranchState::new("master", HEAD), &config),
            BranchClass::SnapshotBranch
        );
    }

    #[test]
    fn test_read_from_repository() {
        let repo = MockRepository::new("feature/x", HEAD);
        let state = BranchState::read(&repo).unwrap();
        assert_eq!(state.name, "feature/x");
        assert_eq!(state.head_commit, HEAD);
        assert!(!state.is_detached());
        assert_eq!(state.to_string(), "feature/x");
    }

    #[test]
    fn test_detached_display() {
        let state = BranchState::new(HEAD, HEAD);
        assert!(state.is_detached());
        assert!(state.to_string().contains("HEAD detached"));
    }
}
