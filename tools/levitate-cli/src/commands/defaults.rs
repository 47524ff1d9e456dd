//! Print default configuration.

use levitate_common::config::AppConfig;
use levitate_model::profile::LevitationProfile;

pub fn run(app: bool) -> anyhow::Result<()> {
    let json = if app {
        serde_json::to_string_pretty(&AppConfig::default())?
    } else {
        serde_json::to_string_pretty(&LevitationProfile::default())?
    };
    println!("{json}");
    Ok(())
}
