//! swipekit CLI: replay, synthesize, and validate pointer traces.
//!
//! Usage:
//!   swipekit replay <TRACE>      Replay a trace and print recognized swipes
//!   swipekit synth [OPTIONS]     Write a synthetic swipe trace
//!   swipekit validate <TRACE>    Check a trace for ordering problems
//!   swipekit config              Print the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swipekit_common::config::{LoggingConfig, SwipeConfig};
use swipekit_model::SwipeDirection;

mod commands;

use commands::synth::{PointerArg, ScrollPosition};

#[derive(Parser)]
#[command(
    name = "swipekit",
    about = "Directional swipe recognition for mouse and touch input",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the standard location)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace and print every recognized swipe
    Replay {
        /// Path to the trace file
        path: PathBuf,

        /// Scroll offset of the surface (overrides the trace header)
        #[arg(long)]
        scroll_top: Option<f64>,

        /// Content height of the surface (overrides the trace header)
        #[arg(long)]
        content_height: Option<f64>,

        /// Viewport height of the surface (overrides the trace header)
        #[arg(long)]
        viewport_height: Option<f64>,

        /// Treat the host as a desktop pointer context
        #[arg(long)]
        desktop: bool,

        /// Recognize touch input only
        #[arg(long)]
        touch_only: bool,

        /// Do not register left/right swipes
        #[arg(long)]
        no_horizontal: bool,

        /// Print signals as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Write a synthetic swipe trace
    Synth {
        /// Swipe direction (left, right, up, down)
        #[arg(short, long)]
        direction: SwipeDirection,

        /// Output trace file
        #[arg(short, long)]
        output: PathBuf,

        /// Travel along the swipe axis (px)
        #[arg(long, default_value = "120")]
        distance: f64,

        /// Drift across the swipe axis (px)
        #[arg(long, default_value = "0")]
        drift: f64,

        /// Number of move events between start and end
        #[arg(long, default_value = "6")]
        steps: usize,

        /// Input device
        #[arg(long, value_enum, default_value = "touch")]
        pointer: PointerArg,

        /// Scroll position recorded in the trace header
        #[arg(long, value_enum, default_value = "none")]
        scroll: ScrollPosition,
    },

    /// Check a trace for ordering problems
    Validate {
        /// Path to the trace file
        path: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SwipeConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => SwipeConfig::load(),
    };

    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        }
    } else {
        config.logging.clone()
    };
    if !swipekit_common::logging::init_logging(&logging) {
        eprintln!("Logging was already initialized; keeping the existing subscriber");
    }

    match cli.command {
        Commands::Replay {
            path,
            scroll_top,
            content_height,
            viewport_height,
            desktop,
            touch_only,
            no_horizontal,
            json,
        } => commands::replay::run(
            config,
            path,
            commands::replay::ReplayOptions {
                scroll_top,
                content_height,
                viewport_height,
                desktop,
                touch_only,
                no_horizontal,
            },
            json,
        ),
        Commands::Synth {
            direction,
            output,
            distance,
            drift,
            steps,
            pointer,
            scroll,
        } => commands::synth::run(direction, output, distance, drift, steps, pointer, scroll),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}
