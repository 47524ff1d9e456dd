//! Print derived levitation fields for a static state.

use std::path::PathBuf;

use levitate_engine::transform::{project, Layer, LayerTransform, LevitationFrame};
use levitate_engine::LevitationState;
use levitate_model::geometry::{Density, IntSize, Offset};

use super::load_profile;

pub struct InspectOptions {
    pub profile: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub x: f32,
    pub y: f32,
    pub press_fraction: f32,
    pub density: f32,
    pub json: bool,
}

pub fn run(options: InspectOptions) -> anyhow::Result<()> {
    let profile = load_profile(options.profile.as_deref())?;
    for advisory in profile.advisories() {
        tracing::warn!(%advisory, "profile advisory");
    }

    let density = Density(options.density);
    let mut state = LevitationState::from_profile(&profile);
    state.set_content_size(IntSize::new(options.width, options.height));
    state.convert_shadow_offsets(density);
    state.sync_press_fraction(options.press_fraction);
    state.sync_offset(Offset::new(options.x, options.y));

    if options.json {
        let frame = LevitationFrame::capture(&state, true, density);
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    println!(
        "State: {}x{} @ ({}, {}), press fraction {}",
        options.width, options.height, options.x, options.y, options.press_fraction
    );
    println!();

    println!("Progress:");
    print_offset("size", Offset::new(state.size().width, state.size().height));
    print_offset("pivot offset", state.pivot_offset());
    print_offset("offset progress", state.offset_progress());
    print_offset("degree progress", state.degree_progress());
    println!();

    println!("Content:");
    println!("  {:<18} {:.6}", "scale", state.scale());
    print_offset("rotation", state.rotation());
    print_transform(&project(&state, Layer::Content));
    println!();

    if state.shadow_config().is_none() {
        println!("Shadow: disabled");
        return Ok(());
    }
    println!("Shadow:");
    println!("  {:<18} {:.6}", "scale", state.shadow_scale());
    print_offset("rotation", state.shadow_rotation());
    print_offset("translation", state.shadow_translation());
    print_transform(&project(&state, Layer::Shadow));

    Ok(())
}

fn print_offset(label: &str, offset: Offset) {
    println!("  {label:<18} ({:.6}, {:.6})", offset.x, offset.y);
}

fn print_transform(transform: &LayerTransform) {
    println!(
        "  {:<18} ({:.4}, {:.4})",
        "origin",
        transform.transform_origin.pivot_fraction_x,
        transform.transform_origin.pivot_fraction_y
    );
    println!("  {:<18} {:.4}", "camera distance", transform.camera_distance);
}
