use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Gav;

/// Unified error type for branch-version operations
#[derive(Error, Debug)]
pub enum BranchVersionError {
    #[error("Version format error: {gav} version does not match {expected}")]
    Format { gav: Gav, expected: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Version lookup failed: no branch version determined for {gav}")]
    Lookup { gav: Gav },

    #[error("Descriptor persistence failed for '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in branch-version
pub type Result<T> = std::result::Result<T, BranchVersionError>;

impl BranchVersionError {
    /// Create a version format error for the given module
    pub fn format(gav: Gav, expected: impl Into<String>) -> Self {
        BranchVersionError::Format {
            gav,
            expected: expected.into(),
        }
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        BranchVersionError::Repository(msg.into())
    }

    /// Create a lookup error for a module missing from the version map
    pub fn lookup(gav: Gav) -> Self {
        BranchVersionError::Lookup { gav }
    }

    /// Wrap an I/O failure on a descriptor file
    pub fn persistence(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        BranchVersionError::Persistence {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a descriptor content error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        BranchVersionError::Descriptor(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BranchVersionError::Config(msg.into())
    }
}
