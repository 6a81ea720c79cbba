use std::path::{Path, PathBuf};

use crate::domain::{Gav, VersionRange};
use crate::pom::Model;

/// One module of the build together with both forms of its descriptor
#[derive(Debug, Clone)]
pub struct Project {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    /// Selector recomputed whenever the version changes
    pub version_range: Option<VersionRange>,
    /// Coordinates referenced by `<parent>`, if any
    pub parent: Option<Gav>,
    /// Effective model, with inherited values filled in
    pub model: Model,
    /// Model as authored, serialized when the descriptor is rewritten
    pub original_model: Model,
    /// Descriptor file currently in effect for this module
    pub pom_file: PathBuf,
    pub basedir: PathBuf,
}

impl Project {
    /// Build a project from the model read at `pom_file`
    pub fn new(original_model: Model, pom_file: impl Into<PathBuf>) -> Self {
        let pom_file = pom_file.into();
        let basedir = pom_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let model = original_model.resolved();
        let gav = Gav::from_model(&model);

        Project {
            group_id: gav.group_id().map(str::to_string),
            artifact_id: gav.artifact_id().map(str::to_string),
            version: gav.version().map(str::to_string),
            version_range: gav.version().map(VersionRange::from_version),
            parent: model.parent.as_ref().map(Gav::from_parent),
            model,
            original_model,
            pom_file,
            basedir,
        }
    }

    /// Live coordinates of this project
    pub fn gav(&self) -> Gav {
        Gav::of(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone(),
        )
    }

    /// Set the live version and its selector
    pub fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
        self.version_range = Some(VersionRange::from_version(version));
    }

    /// Declared profile ids of this project
    pub fn profiles(&self) -> &[String] {
        &self.model.profiles
    }
}
