//! Replay a pointer scenario through a levitation surface.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use levitate_common::clock::FrameClock;
use levitate_common::error::LevitateError;
use levitate_engine::{GestureConfig, LevitationFrame, LevitationSurface};
use levitate_model::geometry::{Density, IntSize};
use levitate_model::scenario::{parse_scenario, ScenarioEvent, ScenarioKind};
use serde::Serialize;

use super::load_profile;

pub struct SimulateOptions {
    pub scenario: PathBuf,
    pub profile: Option<PathBuf>,
    pub fps: u32,
    pub density: f32,
    pub touch_slop_dp: f32,
    pub tail_ms: u64,
    pub every: u64,
    pub json: bool,
    pub realtime: bool,
}

/// One printed frame in `--json` mode.
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    t: u64,
    #[serde(flatten)]
    snapshot: &'a LevitationFrame,
}

pub async fn run(options: SimulateOptions) -> anyhow::Result<()> {
    let events = load_scenario(&options.scenario)?;
    let profile = load_profile(options.profile.as_deref())?;

    let density = Density(options.density);
    let mut surface = LevitationSurface::new(profile, density)
        .with_gesture_config(GestureConfig::from_density(options.touch_slop_dp, density));

    let mut clock = FrameClock::start(options.fps);
    let last_event_ns = events.last().map_or(0, |event| event.timestamp_ns);
    let end_ns = last_event_ns.saturating_add(FrameClock::ms_to_ns(options.tail_ms));
    let total_frames = clock.frames_for(end_ns).saturating_add(1);
    let every = options.every.max(1);

    tracing::info!(
        scenario = %options.scenario.display(),
        events = events.len(),
        frames = total_frames,
        fps = options.fps,
        started = clock.started_wall(),
        "simulation started"
    );

    if !options.json {
        println!(
            "Levitate simulation: {} ({} events, {} frames @ {}fps)",
            options.scenario.display(),
            events.len(),
            total_frames,
            options.fps
        );
        println!("{}", "=".repeat(72));
    }

    let mut ticker = options
        .realtime
        .then(|| tokio::time::interval(Duration::from_nanos(clock.frame_interval_ns())));

    let mut next_event = 0;
    let mut peak_press_fraction: f32 = 0.0;
    let mut pressed_frames = 0u64;
    let dt = clock.frame_dt_secs();

    for _ in 0..total_frames {
        let now = clock.now_ns();
        while let Some(event) = events.get(next_event) {
            if event.timestamp_ns > now {
                break;
            }
            apply_event(&mut surface, event);
            next_event += 1;
        }

        let frame = surface.frame(dt);
        peak_press_fraction = peak_press_fraction.max(frame.press_fraction);
        if frame.is_pressed {
            pressed_frames += 1;
        }

        let index = clock.frame_index();
        if index % every == 0 {
            if options.json {
                let record = FrameRecord {
                    frame: index,
                    t: now,
                    snapshot: &frame,
                };
                println!("{}", serde_json::to_string(&record)?);
            } else {
                print_frame(now, &frame);
            }
        }

        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }
        clock.advance();
    }

    tracing::info!(
        frames = total_frames,
        peak_press_fraction,
        pressed_frames,
        settled = !surface.is_animating(),
        "simulation finished"
    );

    if !options.json {
        println!();
        println!("Frames: {total_frames}");
        println!("Pressed frames: {pressed_frames}");
        println!("Peak press fraction: {peak_press_fraction:.4}");
        println!(
            "Settled: {}",
            if surface.is_animating() { "no" } else { "yes" }
        );
    }

    Ok(())
}

fn load_scenario(path: &Path) -> anyhow::Result<Vec<ScenarioEvent>> {
    if !path.exists() {
        return Err(LevitateError::file_not_found(path).into());
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl") | Some("ndjson") => {}
        _ => {
            return Err(LevitateError::unsupported(format!(
                "scenario {} is not a .jsonl file",
                path.display()
            ))
            .into())
        }
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    let events = parse_scenario(&content)
        .map_err(|e| LevitateError::scenario(format!("{}: {e}", path.display())))?;
    Ok(events)
}

fn apply_event(surface: &mut LevitationSurface, event: &ScenarioEvent) {
    match event.kind {
        ScenarioKind::Size { width, height } => {
            tracing::debug!(width, height, "content size");
            surface.set_content_size(IntSize::new(width, height));
        }
        ScenarioKind::Press { pivot } => match pivot {
            Some(pivot) => surface.press_at(pivot),
            None => surface.press(),
        },
        ScenarioKind::Enable { enabled } => surface.set_enabled(enabled),
        ScenarioKind::Down { .. }
        | ScenarioKind::Move { .. }
        | ScenarioKind::Up { .. }
        | ScenarioKind::Cancel => {
            if let Some(pointer) = event.pointer_event() {
                let consumed = surface.dispatch(pointer);
                tracing::debug!(t = event.timestamp_ns, ?pointer, consumed, "pointer event");
            }
        }
    }
}

fn print_frame(now_ns: u64, frame: &LevitationFrame) {
    let flags = match (frame.is_pressed, frame.is_dragged) {
        (true, true) => "dragged",
        (true, false) => "pressed",
        _ => "",
    };
    println!(
        "{:>9.1}ms  press={:.3}  scale={:.4}  rot=({:+.2}, {:+.2})  offset=({:.1}, {:.1})  {}",
        FrameClock::ns_to_secs(now_ns) * 1000.0,
        frame.press_fraction,
        frame.content.scale_x,
        frame.content.rotation_x,
        frame.content.rotation_y,
        frame.offset.x,
        frame.offset.y,
        flags
    );
}
