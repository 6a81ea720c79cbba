use std::collections::BTreeMap;

use crate::domain::version::SNAPSHOT_SUFFIX;
use crate::domain::{release_version, sanitize_branch_name, BranchClass, BranchState, Gav, Project};

/// New version of every project, keyed by its coordinates before the change
pub type VersionMap = BTreeMap<Gav, String>;

/// Version a module with `version` gets on the given branch
///
/// | Class          | Result                              |
/// |----------------|-------------------------------------|
/// | Detached       | head commit id                      |
/// | MainRelease    | `1.2.3`                             |
/// | ReleaseBranch  | `support_1_x-1.2.3`                 |
/// | SnapshotBranch | `feature_foo-SNAPSHOT`              |
pub fn branch_version(class: BranchClass, branch: &BranchState, version: &str) -> String {
    match class {
        BranchClass::Detached => branch.head_commit.clone(),
        BranchClass::MainRelease => release_version(version).to_string(),
        BranchClass::ReleaseBranch => format!(
            "{}-{}",
            sanitize_branch_name(&branch.name),
            release_version(version)
        ),
        BranchClass::SnapshotBranch => {
            format!("{}{}", sanitize_branch_name(&branch.name), SNAPSHOT_SUFFIX)
        }
    }
}

/// Determine the branch version of every project
pub fn determine_versions(
    projects: &[Project],
    branch: &BranchState,
    class: BranchClass,
) -> VersionMap {
    let mut versions = VersionMap::new();
    for project in projects {
        let gav = project.gav();
        let version = project.version.as_deref().unwrap_or_default();
        let new_version = branch_version(class, branch, version);
        log::info!("Processing change of {} -> {}", gav, new_version);
        versions.insert(gav, new_version);
    }
    versions
}
