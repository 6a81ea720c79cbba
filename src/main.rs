use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use branch_version::cli::orchestration::{
    run_versioning_workflow, VersioningWorkflowArgs, WorkflowResult,
};
use branch_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "branch-version",
    version,
    about = "Rewrite module versions of a multi-module build from the current git branch"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Execution root holding the root pom.xml")]
    root: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Main release branch name [default: master]")]
    main_branch: Option<String>,

    #[arg(
        long = "release-prefix",
        help = "Release branch prefix, repeatable [default: support-, support/]"
    )]
    release_prefixes: Vec<String>,

    #[arg(
        long,
        env = "DISABLE_BRANCH_VERSIONING",
        help = "Skip branch versioning entirely"
    )]
    disable_branch_versioning: bool,

    #[arg(long, help = "Keep rewritten descriptors after exit")]
    keep_descriptors: bool,

    #[arg(long, help = "Directory for rewritten descriptors")]
    descriptor_dir: Option<PathBuf>,

    #[arg(long, help = "Preview versions without writing anything")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl Args {
    fn workflow_args(&self) -> VersioningWorkflowArgs {
        VersioningWorkflowArgs {
            root_dir: self.root.clone(),
            config_path: self.config.clone(),
            main_branch: self.main_branch.clone(),
            release_prefixes: self.release_prefixes.clone(),
            disable: self.disable_branch_versioning,
            keep_descriptors: self.keep_descriptors,
            descriptor_dir: self.descriptor_dir.clone(),
            dry_run: self.dry_run,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match run_versioning_workflow(&args.workflow_args()) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    match result {
        WorkflowResult::Disabled => {
            ui::display_status("Branch versioning disabled");
        }
        WorkflowResult::Planned { plan, .. } => {
            ui::display_branch(&plan.branch, plan.class);
            ui::display_planned_versions(
                plan.versions
                    .iter()
                    .map(|(gav, version)| (gav.to_string(), version.as_str())),
            );
        }
        WorkflowResult::Applied { outcome, store, .. } => {
            // unkept descriptors are deleted when main returns
            let keep = store.keeps_files();
            ui::display_branch(&outcome.branch, outcome.class);
            ui::display_version_changes(&outcome.changes, keep);
            ui::display_release_profile(outcome.release_profile.as_deref());
            if keep {
                ui::display_success(&format!(
                    "Wrote {} descriptor(s)",
                    outcome.changes.len()
                ));
            } else {
                ui::display_status(
                    "Rewritten descriptors are removed on exit; pass --keep-descriptors to retain them",
                );
            }
        }
    }

    Ok(())
}
