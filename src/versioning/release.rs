use crate::domain::{BranchClass, Project};

/// Profile to activate for this build, if any.
///
/// Release and main branches activate `profile` when the root project
/// declares it.
pub fn release_profile(class: BranchClass, root: Option<&Project>, profile: &str) -> Option<String> {
    if !class.is_release() {
        return None;
    }

    let root = root?;
    if root.profiles().iter().any(|id| id == profile) {
        log::info!("Activate {} profile", profile);
        Some(profile.to_string())
    } else {
        log::info!("No {} profile", profile);
        None
    }
}
