//! Levitate CLI: replay and inspect the levitation effect.
//!
//! Usage:
//!   levitate simulate <SCENARIO>   Replay a pointer scenario frame by frame
//!   levitate inspect [OPTIONS]     Print derived fields for a static state
//!   levitate defaults              Print the default profile
//!   levitate check <PROFILE>       Report profile advisories

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use levitate_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "levitate",
    about = "Pointer-driven levitation effect: replay, inspect, and check profiles",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL pointer scenario through a levitation surface
    Simulate {
        /// Path to the scenario file
        scenario: PathBuf,

        /// Levitation profile (JSON); defaults when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Pixels per density-independent unit
        #[arg(long)]
        density: Option<f32>,

        /// Extra time simulated after the last event (ms)
        #[arg(long)]
        tail_ms: Option<u64>,

        /// Print every Nth frame
        #[arg(long, default_value = "1")]
        every: u64,

        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,

        /// Pace frames at wall-clock speed
        #[arg(long)]
        realtime: bool,
    },

    /// Print every derived field for a static state
    Inspect {
        /// Levitation profile (JSON); defaults when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Content width (px)
        #[arg(long)]
        width: u32,

        /// Content height (px)
        #[arg(long)]
        height: u32,

        /// Offset x (px)
        #[arg(long, allow_negative_numbers = true)]
        x: f32,

        /// Offset y (px)
        #[arg(long, allow_negative_numbers = true)]
        y: f32,

        /// Press animation value [0.0, 1.0]
        #[arg(long, default_value = "1.0")]
        press_fraction: f32,

        /// Pixels per density-independent unit
        #[arg(long, default_value = "1.0")]
        density: f32,

        /// Print the frame snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default profile as JSON
    Defaults {
        /// Print the default application config instead
        #[arg(long)]
        app: bool,
    },

    /// Report non-fatal advisories for a profile
    Check {
        /// Path to the profile
        profile: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app_config = AppConfig::load();

    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    levitate_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Simulate {
            scenario,
            profile,
            fps,
            density,
            tail_ms,
            every,
            json,
            realtime,
        } => {
            let defaults = &app_config.simulation;
            commands::simulate::run(commands::simulate::SimulateOptions {
                scenario,
                profile,
                fps: fps.unwrap_or(defaults.frame_rate_hz),
                density: density.unwrap_or(defaults.density),
                touch_slop_dp: defaults.touch_slop_dp,
                tail_ms: tail_ms.unwrap_or(defaults.tail_ms),
                every,
                json,
                realtime,
            })
            .await
        }
        Commands::Inspect {
            profile,
            width,
            height,
            x,
            y,
            press_fraction,
            density,
            json,
        } => commands::inspect::run(commands::inspect::InspectOptions {
            profile,
            width,
            height,
            x,
            y,
            press_fraction,
            density,
            json,
        }),
        Commands::Defaults { app } => commands::defaults::run(app),
        Commands::Check { profile } => commands::check::run(profile),
    }
}
