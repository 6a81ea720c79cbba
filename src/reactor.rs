//! Loading the module tree of a build
//!
//! The root `pom.xml` is read first, then every declared `<module>` depth
//! first, so parents always precede their children in the result.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::Project;
use crate::error::{BranchVersionError, Result};
use crate::pom;

/// Descriptor file name inside a module directory
pub const POM_FILE_NAME: &str = "pom.xml";

/// Load the root project in `root_dir` and all of its modules
pub fn load(root_dir: &Path) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    let mut visited = HashSet::new();
    load_project(&root_dir.join(POM_FILE_NAME), &mut projects, &mut visited)?;
    Ok(projects)
}

fn load_project(
    pom_file: &Path,
    projects: &mut Vec<Project>,
    visited: &mut HashSet<PathBuf>,
) -> Result<()> {
    let pom_file = pom_file
        .canonicalize()
        .map_err(|e| BranchVersionError::persistence(pom_file, e))?;
    if !visited.insert(pom_file.clone()) {
        return Err(BranchVersionError::descriptor(format!(
            "Module '{}' is declared more than once",
            pom_file.display()
        )));
    }

    let model = pom::read_model(&pom_file)?;
    if model.artifact_id.is_none() {
        return Err(BranchVersionError::descriptor(format!(
            "'{}' does not declare an artifactId",
            pom_file.display()
        )));
    }

    let project = Project::new(model, pom_file);
    log::debug!("loaded {} from {}", project.gav(), project.pom_file.display());

    let module_files: Vec<PathBuf> = project
        .original_model
        .modules
        .iter()
        .map(|module| module_pom(&project.basedir, module))
        .collect();
    projects.push(project);

    for module_file in module_files {
        load_project(&module_file, projects, visited)?;
    }

    Ok(())
}

/// A module entry names either a directory holding `pom.xml` or a pom file
fn module_pom(basedir: &Path, module: &str) -> PathBuf {
    let path = basedir.join(module);
    if path.is_dir() {
        path.join(POM_FILE_NAME)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gav;
    use std::fs;
    use tempfile::TempDir;

    fn write_pom(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(POM_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_load_nested_modules_parents_first() {
        let dir = TempDir::new().unwrap();
        write_pom(
            dir.path(),
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version>\
             <modules><module>a</module></modules></project>",
        );
        write_pom(
            &dir.path().join("a"),
            "<project><parent><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version></parent>\
             <artifactId>a</artifactId><modules><module>b</module></modules></project>",
        );
        write_pom(
            &dir.path().join("a/b"),
            "<project><parent><groupId>g</groupId><artifactId>a</artifactId><version>1.0-SNAPSHOT</version></parent>\
             <artifactId>b</artifactId></project>",
        );

        let projects = load(dir.path()).unwrap();
        let gavs: Vec<Gav> = projects.iter().map(Project::gav).collect();
        assert_eq!(
            gavs,
            vec![
                Gav::new("g", "root", "1.0-SNAPSHOT"),
                Gav::new("g", "a", "1.0-SNAPSHOT"),
                Gav::new("g", "b", "1.0-SNAPSHOT"),
            ]
        );
        assert_eq!(projects[2].parent, Some(Gav::new("g", "a", "1.0-SNAPSHOT")));
    }

    #[test]
    fn test_module_may_name_a_pom_file() {
        let dir = TempDir::new().unwrap();
        write_pom(
            dir.path(),
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version>\
             <modules><module>alt/custom-pom.xml</module></modules></project>",
        );
        fs::create_dir_all(dir.path().join("alt")).unwrap();
        fs::write(
            dir.path().join("alt/custom-pom.xml"),
            "<project><groupId>g</groupId><artifactId>alt</artifactId><version>1.0-SNAPSHOT</version></project>",
        )
        .unwrap();

        let projects = load(dir.path()).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].artifact_id.as_deref(), Some("alt"));
    }

    #[test]
    fn test_missing_root_pom() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, BranchVersionError::Persistence { .. }));
    }

    #[test]
    fn test_self_referencing_module_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_pom(
            dir.path(),
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1.0-SNAPSHOT</version>\
             <modules><module>.</module></modules></project>",
        );

        let err = load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_missing_artifact_id() {
        let dir = TempDir::new().unwrap();
        write_pom(dir.path(), "<project><groupId>g</groupId></project>");
        assert!(load(dir.path()).is_err());
    }
}
