//! Branch versioning pipeline
//!
//! Runs once per build over the full project list:
//!
//! 1. [validate::validate_versions] - every version is a semantic snapshot version
//! 2. [crate::domain::classify] - what kind of branch is checked out
//! 3. [resolve::determine_versions] - the new version of every project
//! 4. [propagate::propagate] - apply versions and write new descriptors
//!
//! Steps 1-3 are pure and form a [VersionPlan]; only step 4 mutates
//! projects or touches the filesystem.

pub mod propagate;
pub mod release;
pub mod resolve;
pub mod store;
pub mod validate;

pub use propagate::{propagate, VersionChange};
pub use release::release_profile;
pub use resolve::{branch_version, determine_versions, VersionMap};
pub use store::DescriptorStore;
pub use validate::validate_versions;

use crate::config::Config;
use crate::domain::{classify, BranchClass, BranchState, Project};
use crate::error::Result;
use crate::git::Repository;

/// Versions computed for a build, not yet applied
#[derive(Debug, Clone, PartialEq)]
pub struct VersionPlan {
    pub branch: BranchState,
    pub class: BranchClass,
    pub versions: VersionMap,
}

/// Result of applying a plan
#[derive(Debug, Clone, PartialEq)]
pub struct VersioningOutcome {
    pub branch: BranchState,
    pub class: BranchClass,
    pub changes: Vec<VersionChange>,
    /// Profile the build should activate, if any
    pub release_profile: Option<String>,
}

/// Branch versioning with a fixed configuration
pub struct BranchVersioning<'a> {
    config: &'a Config,
}

impl<'a> BranchVersioning<'a> {
    pub fn new(config: &'a Config) -> Self {
        BranchVersioning { config }
    }

    /// Validate the projects and compute their branch versions.
    ///
    /// The repository is only queried once every version has passed
    /// validation.
    pub fn plan<R: Repository + ?Sized>(&self, projects: &[Project], repo: &R) -> Result<VersionPlan> {
        validate_versions(projects)?;

        let branch = BranchState::read(repo)?;
        log::info!("Branch: {}", branch);
        let class = classify(&branch, self.config);
        log::debug!("branch class: {}", class);

        let versions = determine_versions(projects, &branch, class);
        Ok(VersionPlan {
            branch,
            class,
            versions,
        })
    }

    /// Apply a plan to the projects it was computed from
    pub fn apply(
        &self,
        projects: &mut [Project],
        plan: VersionPlan,
        store: &mut DescriptorStore,
    ) -> Result<VersioningOutcome> {
        let changes = propagate(projects, &plan.versions, store)?;
        let release_profile =
            release_profile(plan.class, projects.first(), &self.config.release_profile);

        Ok(VersioningOutcome {
            branch: plan.branch,
            class: plan.class,
            changes,
            release_profile,
        })
    }

    /// Plan and apply in one step
    pub fn run<R: Repository + ?Sized>(
        &self,
        projects: &mut [Project],
        repo: &R,
        store: &mut DescriptorStore,
    ) -> Result<VersioningOutcome> {
        let plan = self.plan(projects, repo)?;
        self.apply(projects, plan, store)
    }
}
