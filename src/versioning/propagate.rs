use std::path::PathBuf;

use crate::domain::{Gav, Project};
use crate::error::{BranchVersionError, Result};
use crate::pom::Model;
use crate::versioning::resolve::VersionMap;
use crate::versioning::store::DescriptorStore;

/// A version applied to one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Coordinates before the change
    pub gav: Gav,
    pub version: String,
    /// Rewritten descriptor now in effect for the project
    pub pom_file: PathBuf,
}

/// Apply `versions` to every project in order.
///
/// Each project gets its new live version, both descriptor forms are updated
/// (parent reference first, then the project's own version), and the
/// original form is written to a fresh file that the project then points at.
/// A failure stops the run; projects already processed stay updated.
pub fn propagate(
    projects: &mut [Project],
    versions: &VersionMap,
    store: &mut DescriptorStore,
) -> Result<Vec<VersionChange>> {
    let mut changes = Vec::with_capacity(projects.len());

    for project in projects.iter_mut() {
        let gav = project.gav();
        let version = versions
            .get(&gav)
            .ok_or_else(|| BranchVersionError::lookup(gav.clone()))?;
        let artifact = gav.artifact_id().unwrap_or_default().to_string();

        log::debug!("{} set version {}", artifact, version);
        project.set_version(version);

        if let Some(parent_version) = project.parent.as_ref().and_then(|p| versions.get(p)) {
            log::debug!("{} set parent version {}", artifact, parent_version);
            project.parent = project.parent.as_ref().map(|p| p.with_version(parent_version));
        }

        log::debug!("{} set model version {}", artifact, version);
        update_model(&mut project.model, version, versions);
        log::debug!("{} set original model version {}", artifact, version);
        update_model(&mut project.original_model, version, versions);

        let pom_file = store.persist(&project.original_model)?;
        log::debug!("{} set pom file {}", artifact, pom_file.display());
        project.pom_file = pom_file.clone();

        changes.push(VersionChange {
            gav,
            version: version.clone(),
            pom_file,
        });
    }

    Ok(changes)
}

/// Point the model's parent reference at the parent's new version, then set
/// the model's own version. Parents outside the build keep their version.
fn update_model(model: &mut Model, version: &str, versions: &VersionMap) {
    if let Some(parent) = model.parent.as_mut() {
        if let Some(parent_version) = versions.get(&Gav::from_parent(parent)) {
            parent.version = Some(parent_version.clone());
        }
    }
    model.version = Some(version.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::parse_model;
    use std::fs;
    use tempfile::TempDir;

    fn root() -> Project {
        let model = parse_model(
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version></project>",
        )
        .unwrap();
        Project::new(model, "/work/pom.xml")
    }

    fn child() -> Project {
        let model = parse_model(
            "<project><parent><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version></parent>\
             <artifactId>child</artifactId></project>",
        )
        .unwrap();
        Project::new(model, "/work/child/pom.xml")
    }

    fn versions(entries: &[(&Gav, &str)]) -> VersionMap {
        entries
            .iter()
            .map(|(gav, v)| ((*gav).clone(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_updates_live_and_descriptor_versions() {
        let dir = TempDir::new().unwrap();
        let mut store = DescriptorStore::new().in_directory(dir.path());
        let mut projects = vec![root(), child()];
        let root_gav = projects[0].gav();
        let child_gav = projects[1].gav();
        let map = versions(&[(&root_gav, "1.0"), (&child_gav, "1.0")]);

        let changes = propagate(&mut projects, &map, &mut store).unwrap();

        assert_eq!(changes.len(), 2);
        let child = &projects[1];
        assert_eq!(child.version.as_deref(), Some("1.0"));
        assert_eq!(child.version_range.as_ref().unwrap().recommended_version(), "1.0");
        assert_eq!(child.parent, Some(Gav::new("g", "root", "1.0")));
        assert_eq!(child.model.version.as_deref(), Some("1.0"));
        assert_eq!(child.original_model.version.as_deref(), Some("1.0"));
        assert_eq!(
            child.model.parent.as_ref().unwrap().version.as_deref(),
            Some("1.0")
        );
        assert_eq!(
            child.original_model.parent.as_ref().unwrap().version.as_deref(),
            Some("1.0")
        );

        let written = parse_model(&fs::read_to_string(&child.pom_file).unwrap()).unwrap();
        assert_eq!(written.version.as_deref(), Some("1.0"));
        assert_eq!(written.parent.unwrap().version.as_deref(), Some("1.0"));
        assert_eq!(changes[1].pom_file, child.pom_file);
    }

    #[test]
    fn test_parent_reference_uses_parent_version_not_own() {
        let dir = TempDir::new().unwrap();
        let mut store = DescriptorStore::new().in_directory(dir.path());
        let mut projects = vec![root(), child()];
        let root_gav = projects[0].gav();
        let child_gav = projects[1].gav();
        let map = versions(&[(&root_gav, "root-version"), (&child_gav, "child-version")]);

        propagate(&mut projects, &map, &mut store).unwrap();

        let child = &projects[1];
        assert_eq!(child.version.as_deref(), Some("child-version"));
        assert_eq!(
            child.model.parent.as_ref().unwrap().version.as_deref(),
            Some("root-version")
        );
        assert_eq!(
            child.original_model.parent.as_ref().unwrap().version.as_deref(),
            Some("root-version")
        );
    }

    #[test]
    fn test_external_parent_is_untouched() {
        let dir = TempDir::new().unwrap();
        let mut store = DescriptorStore::new().in_directory(dir.path());
        let model = parse_model(
            "<project><parent><groupId>org.springframework.boot</groupId>\
             <artifactId>spring-boot-starter-parent</artifactId><version>3.2.0</version></parent>\
             <artifactId>app</artifactId><version>1.0-SNAPSHOT</version></project>",
        )
        .unwrap();
        let mut projects = vec![Project::new(model, "/work/pom.xml")];
        let gav = projects[0].gav();
        let map = versions(&[(&gav, "develop-SNAPSHOT")]);

        propagate(&mut projects, &map, &mut store).unwrap();

        let project = &projects[0];
        assert_eq!(project.version.as_deref(), Some("develop-SNAPSHOT"));
        assert_eq!(
            project.model.parent.as_ref().unwrap().version.as_deref(),
            Some("3.2.0")
        );
        assert_eq!(
            project.parent.as_ref().unwrap().version(),
            Some("3.2.0")
        );

        let written = parse_model(&fs::read_to_string(&project.pom_file).unwrap()).unwrap();
        assert_eq!(written.parent.unwrap().version.as_deref(), Some("3.2.0"));
        assert_eq!(written.version.as_deref(), Some("develop-SNAPSHOT"));
    }

    #[test]
    fn test_missing_entry_is_lookup_error() {
        let dir = TempDir::new().unwrap();
        let mut store = DescriptorStore::new().in_directory(dir.path());
        let mut projects = vec![root()];

        let err = propagate(&mut projects, &VersionMap::new(), &mut store).unwrap_err();
        assert!(matches!(err, BranchVersionError::Lookup { .. }));
        assert_eq!(projects[0].version.as_deref(), Some("1.0-SNAPSHOT"));
        assert!(store.files().is_empty());
    }

    #[test]
    fn test_write_failure_leaves_pointer_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = DescriptorStore::new().in_directory(dir.path().join("missing"));
        let mut projects = vec![root()];
        let gav = projects[0].gav();
        let map = versions(&[(&gav, "1.0")]);

        let err = propagate(&mut projects, &map, &mut store).unwrap_err();
        assert!(matches!(err, BranchVersionError::Persistence { .. }));
        assert_eq!(projects[0].pom_file, PathBuf::from("/work/pom.xml"));
    }
}
