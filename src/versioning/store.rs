use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::config::DescriptorConfig;
use crate::error::{BranchVersionError, Result};
use crate::pom::{self, Model};

/// Owner of the rewritten descriptor files.
///
/// Every descriptor goes to a new uniquely named file; original files are
/// never opened for writing. Files are deleted when the store is dropped
/// unless it was created with `keep` set.
#[derive(Debug, Default)]
pub struct DescriptorStore {
    directory: Option<PathBuf>,
    keep: bool,
    written: Vec<TempPath>,
    kept: Vec<PathBuf>,
}

impl DescriptorStore {
    /// Store writing to the system temp directory, cleaned up on drop
    pub fn new() -> Self {
        DescriptorStore::default()
    }

    pub fn from_config(config: &DescriptorConfig) -> Self {
        DescriptorStore {
            directory: config.directory.clone(),
            keep: config.keep,
            ..DescriptorStore::default()
        }
    }

    /// Write into `directory` instead of the system temp directory
    pub fn in_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Keep written files after the store is dropped
    pub fn keep_files(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Serialize `model` to a fresh file and return its path.
    ///
    /// The file is complete before the path is returned; on failure the
    /// partial file is removed.
    pub fn persist(&mut self, model: &Model) -> Result<PathBuf> {
        let content = pom::render_model(model)?;

        let directory = self
            .directory
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        let mut file = tempfile::Builder::new()
            .prefix("pom")
            .suffix(".xml")
            .tempfile_in(&directory)
            .map_err(|e| BranchVersionError::persistence(&directory, e))?;

        let written = file.write_all(content.as_bytes()).and_then(|_| file.flush());
        written.map_err(|e| BranchVersionError::persistence(file.path(), e))?;

        let temp_path = file.into_temp_path();
        let path = temp_path.to_path_buf();
        if self.keep {
            temp_path
                .keep()
                .map_err(|e| BranchVersionError::persistence(&path, e.error))?;
            self.kept.push(path.clone());
        } else {
            self.written.push(temp_path);
        }

        Ok(path)
    }

    /// Paths of all files written so far
    pub fn files(&self) -> Vec<&Path> {
        self.kept
            .iter()
            .map(PathBuf::as_path)
            .chain(self.written.iter().map(|p| &**p))
            .collect()
    }

    pub fn keeps_files(&self) -> bool {
        self.keep
    }
}
