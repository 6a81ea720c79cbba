pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod pom;
pub mod reactor;
pub mod ui;
pub mod versioning;

pub use error::{BranchVersionError, Result};
