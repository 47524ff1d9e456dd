//! Report profile advisories.

use std::path::PathBuf;

use super::load_profile;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let profile = load_profile(Some(&path))?;

    println!("Levitate Profile Check: {}", path.display());
    println!("{}", "=".repeat(50));

    let levitation = &profile.levitation;
    println!(
        "[OK] Levitation: {:?}, degree {}, pivot ({}, {}), camera {}",
        levitation.orientation,
        levitation.degree,
        levitation.pivot.x,
        levitation.pivot.y,
        levitation.camera_distance
    );
    println!(
        "[OK] Press: {:?}, downscale {}",
        profile.press.press_type, profile.press.downscale
    );
    match &profile.shadow {
        Some(shadow) => println!("[OK] Shadow: {:?}", shadow.shadow_type),
        None => println!("[OK] Shadow: disabled"),
    }

    let advisories = profile.advisories();
    println!();
    if advisories.is_empty() {
        println!("No advisories. Profile is within conventional ranges.");
        return Ok(());
    }

    for advisory in &advisories {
        println!("[WARN] {advisory}");
    }
    println!();
    println!(
        "{} advisories. Values are used as given and may extrapolate.",
        advisories.len()
    );
    Ok(())
}
