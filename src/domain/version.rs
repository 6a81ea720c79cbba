use std::fmt;

/// Suffix marking a development (pre-release) version
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// `MAJOR[.MINOR][.PATCH][-PRERELEASE][+BUILD]`, see http://semver.org
pub const SEMVER_PATTERN: &str = r"^(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))?(\.(0|[1-9][0-9]*))?(-[a-zA-Z][a-zA-Z0-9]*)?(\+[a-zA-Z0-9]+)?$";

/// Check whether a version carries the snapshot suffix
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}

/// Strip one trailing `-SNAPSHOT` ("1.2.3-SNAPSHOT" -> "1.2.3")
pub fn release_version(version: &str) -> &str {
    version.strip_suffix(SNAPSHOT_SUFFIX).unwrap_or(version)
}

/// Replace every character outside `[A-Za-z0-9]` with `_`
/// ("feature/foo.bar" -> "feature_foo_bar")
pub fn sanitize_branch_name(branch_name: &str) -> String {
    branch_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Version selector of a live module.
///
/// Modules built in this session always carry a recommended version with no
/// range restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    recommended: String,
}

impl VersionRange {
    /// Selector pinned to a single version
    pub fn from_version(version: impl Into<String>) -> Self {
        VersionRange {
            recommended: version.into(),
        }
    }

    pub fn recommended_version(&self) -> &str {
        &self.recommended
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recommended)
    }
}
