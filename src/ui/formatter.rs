//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text, `display_*` functions print it.

use console::style;

use crate::domain::{BranchClass, BranchState};
use crate::versioning::VersionChange;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One line describing the checked-out branch and how it is treated.
pub fn format_branch(branch: &BranchState, class: BranchClass) -> String {
    format!("Branch: {} ({} versioning)", branch, class)
}

pub fn display_branch(branch: &BranchState, class: BranchClass) {
    println!("\n{}", style(format_branch(branch, class)).bold());
}

/// One line per project: `group::artifact::old -> new`.
pub fn format_version_change(change: &VersionChange) -> String {
    format!("{} -> {}", change.gav, change.version)
}

/// Display every applied version change with its rewritten descriptor.
///
/// # Arguments
/// * `changes` - Applied changes in project order
/// * `show_files` - Also print the path of each rewritten descriptor
pub fn display_version_changes(changes: &[VersionChange], show_files: bool) {
    println!("{}", style("Version changes:").underlined());
    for change in changes {
        println!("  {}", format_version_change(change));
        if show_files {
            println!("    {}", style(change.pom_file.display()).cyan());
        }
    }
}

/// Display planned versions without descriptor paths (dry run).
pub fn display_planned_versions<'a, I>(versions: I)
where
    I: IntoIterator<Item = (String, &'a str)>,
{
    println!("{}", style("Planned version changes:").underlined());
    for (gav, version) in versions {
        println!("  {} -> {}", gav, version);
    }
}

pub fn format_release_profile(profile: Option<&str>) -> String {
    match profile {
        Some(profile) => format!("Activate {} profile", profile),
        None => "No release profile".to_string(),
    }
}

pub fn display_release_profile(profile: Option<&str>) {
    display_status(&format_release_profile(profile));
}
