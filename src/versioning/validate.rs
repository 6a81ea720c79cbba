use regex::Regex;

use crate::domain::version::{is_snapshot, SEMVER_PATTERN, SNAPSHOT_SUFFIX};
use crate::domain::Project;
use crate::error::{BranchVersionError, Result};

/// Ensure every project carries a semantic, snapshot version.
///
/// Projects are checked in order, grammar first and snapshot suffix second;
/// the first violation is returned and the remaining projects are not looked
/// at. Nothing is modified.
pub fn validate_versions(projects: &[Project]) -> Result<()> {
    let semver = Regex::new(SEMVER_PATTERN)
        .map_err(|e| BranchVersionError::config(format!("Invalid version pattern: {}", e)))?;

    for project in projects {
        let gav = project.gav();
        log::info!("Ensure semantic snapshot version @ {}", gav);

        let version = project.version.as_deref().unwrap_or_default();
        if !semver.is_match(version) {
            return Err(BranchVersionError::format(
                gav,
                format!("semantic versioning pattern {}", SEMVER_PATTERN),
            ));
        }
        if !is_snapshot(version) {
            return Err(BranchVersionError::format(
                gav,
                format!("a snapshot version ending with {}", SNAPSHOT_SUFFIX),
            ));
        }
    }

    Ok(())
}
