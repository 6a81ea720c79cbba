use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BranchVersionError, Result};

/// File name looked up in the execution root and the user config directory
pub const CONFIG_FILE_NAME: &str = "branchversion.toml";

/// Represents the complete configuration for branch-version.
///
/// Contains the branch naming conventions, the disable switch, the release
/// profile name and where rewritten descriptors are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_main_release_branch")]
    pub main_release_branch: String,

    #[serde(default = "default_release_branch_prefixes")]
    pub release_branch_prefixes: Vec<String>,

    #[serde(default)]
    pub disable_branch_versioning: bool,

    #[serde(default = "default_release_profile")]
    pub release_profile: String,

    #[serde(default)]
    pub descriptors: DescriptorConfig,
}

/// Returns the default main release branch name.
fn default_main_release_branch() -> String {
    "master".to_string()
}

/// Returns the default release branch prefixes.
fn default_release_branch_prefixes() -> Vec<String> {
    vec!["support-".to_string(), "support/".to_string()]
}

/// Returns the default release profile id.
fn default_release_profile() -> String {
    "release".to_string()
}

/// Configuration for rewritten descriptor files.
///
/// Rewritten descriptors go to the system temp directory unless `directory`
/// is set, and are removed when the process ends unless `keep` is set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DescriptorConfig {
    #[serde(default)]
    pub keep: bool,

    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_release_branch: default_main_release_branch(),
            release_branch_prefixes: default_release_branch_prefixes(),
            disable_branch_versioning: false,
            release_profile: default_release_profile(),
            descriptors: DescriptorConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BranchVersionError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchversion.toml` in the execution root
/// 3. `branchversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root_dir` - Execution root of the build
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, root_dir: &Path) -> Result<Config> {
    let local = root_dir.join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(CONFIG_FILE_NAME);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        BranchVersionError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    Config::from_toml(&config_str)
}
