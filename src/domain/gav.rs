use std::fmt;

use crate::pom::{Model, Parent};

/// Group-Artifact-Version coordinates of a module.
///
/// Every component is optional because descriptors may omit them. Equality,
/// hashing and ordering are structural over all three fields, so two
/// coordinates compare equal exactly when group, artifact and version match
/// (an absent component only equals another absent component).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gav {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl Gav {
    /// Create coordinates from an explicit triple
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Gav {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }

    /// Create coordinates where any component may be absent
    pub fn of(
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
    ) -> Self {
        Gav {
            group_id,
            artifact_id,
            version,
        }
    }

    /// Coordinates of a model, inheriting group and version from its parent
    /// reference when the model does not declare them itself.
    pub fn from_model(model: &Model) -> Self {
        let parent = model.parent.as_ref();
        let group_id = model
            .group_id
            .clone()
            .or_else(|| parent.and_then(|p| p.group_id.clone()));
        let version = model
            .version
            .clone()
            .or_else(|| parent.and_then(|p| p.version.clone()));

        Gav {
            group_id,
            artifact_id: model.artifact_id.clone(),
            version,
        }
    }

    /// Coordinates referenced by a `<parent>` element
    pub fn from_parent(parent: &Parent) -> Self {
        Gav {
            group_id: parent.group_id.clone(),
            artifact_id: parent.artifact_id.clone(),
            version: parent.version.clone(),
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Same group and artifact with a different version
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Gav {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: Some(version.into()),
        }
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.group_id.as_deref().unwrap_or("null"),
            self.artifact_id.as_deref().unwrap_or("null"),
            self.version.as_deref().unwrap_or("null")
        )
    }
}
