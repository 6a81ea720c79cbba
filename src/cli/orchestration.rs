//! Main workflow orchestration logic
//!
//! This module contains the versioning workflow run by the binary. It keeps
//! CLI argument parsing apart from the work itself, so the workflow can be
//! called programmatically without depending on clap.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{load_config, Config};
use crate::domain::Project;
use crate::git::Git2Repository;
use crate::reactor;
use crate::versioning::{BranchVersioning, DescriptorStore, VersionPlan, VersioningOutcome};

/// Arguments for the versioning workflow
///
/// Mirrors the CLI Args; every `Some`/`true` value overrides the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersioningWorkflowArgs {
    /// Execution root holding the root `pom.xml`
    pub root_dir: PathBuf,

    /// Path to custom config file
    pub config_path: Option<String>,

    /// Main release branch name
    pub main_branch: Option<String>,

    /// Release branch prefixes; replace the configured ones when non-empty
    pub release_prefixes: Vec<String>,

    /// Skip branch versioning entirely
    pub disable: bool,

    /// Keep rewritten descriptors after the process exits
    pub keep_descriptors: bool,

    /// Directory for rewritten descriptors
    pub descriptor_dir: Option<PathBuf>,

    /// Compute versions without touching any project or file
    pub dry_run: bool,
}

impl VersioningWorkflowArgs {
    /// Layer the explicit arguments over a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(main_branch) = &self.main_branch {
            config.main_release_branch = main_branch.clone();
        }
        if !self.release_prefixes.is_empty() {
            config.release_branch_prefixes = self.release_prefixes.clone();
        }
        if self.disable {
            config.disable_branch_versioning = true;
        }
        if self.keep_descriptors {
            config.descriptors.keep = true;
        }
        if let Some(dir) = &self.descriptor_dir {
            config.descriptors.directory = Some(dir.clone());
        }
    }
}

/// Result of a workflow run
#[derive(Debug)]
pub enum WorkflowResult {
    /// Branch versioning was switched off; nothing was loaded or changed
    Disabled,

    /// Dry run: versions computed, nothing applied
    Planned {
        plan: VersionPlan,
        projects: Vec<Project>,
    },

    /// Versions applied; rewritten descriptors live as long as `store`
    Applied {
        outcome: VersioningOutcome,
        projects: Vec<Project>,
        store: DescriptorStore,
    },
}

/// Main versioning workflow
///
/// 1. Load configuration and apply argument overrides
/// 2. Stop if branch versioning is disabled
/// 3. Load all projects below the execution root
/// 4. Read the branch and compute versions (repository released afterwards)
/// 5. Apply versions and write new descriptors, unless this is a dry run
pub fn run_versioning_workflow(args: &VersioningWorkflowArgs) -> Result<WorkflowResult> {
    let mut config = load_config(args.config_path.as_deref(), &args.root_dir)
        .context("Failed to load configuration")?;
    args.apply_overrides(&mut config);

    run_with_config(args, &config)
}

/// Versioning workflow with an already resolved configuration
pub fn run_with_config(args: &VersioningWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    if config.disable_branch_versioning {
        log::info!("branch versioning disabled");
        return Ok(WorkflowResult::Disabled);
    }

    let mut projects = reactor::load(&args.root_dir).with_context(|| {
        format!("Failed to load projects from '{}'", args.root_dir.display())
    })?;

    let versioning = BranchVersioning::new(config);
    let plan = {
        let repo = Git2Repository::open(&args.root_dir)?;
        versioning
            .plan(&projects, &repo)
            .context("Branch versioning failed")?
    };

    if args.dry_run {
        return Ok(WorkflowResult::Planned { plan, projects });
    }

    let mut store = DescriptorStore::from_config(&config.descriptors);
    let outcome = versioning
        .apply(&mut projects, plan, &mut store)
        .context("Branch versioning failed")?;

    Ok(WorkflowResult::Applied {
        outcome,
        projects,
        store,
    })
}
