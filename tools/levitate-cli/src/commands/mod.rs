pub mod check;
pub mod defaults;
pub mod inspect;
pub mod simulate;

use std::path::Path;

use anyhow::Context;
use levitate_model::profile::LevitationProfile;

/// Load `path`, or the default profile when none is given.
pub fn load_profile(path: Option<&Path>) -> anyhow::Result<LevitationProfile> {
    match path {
        Some(path) => LevitationProfile::load_from(path)
            .with_context(|| format!("Failed to load profile {}", path.display())),
        None => Ok(LevitationProfile::default()),
    }
}
