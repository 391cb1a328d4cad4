//! saavy-pad - play a scale by dragging the mouse across the terminal
//!
//! Run with: cargo run --bin saavy-pad -- --scale pentatonic --sound ethereal-bells
//!
//! Logs go to a file (the terminal belongs to the UI). Set RUST_LOG=debug to
//! see every voice start and teardown.

mod app;
mod input;
mod ui;

use std::{fs::File, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::PadApp;
use saavy_pad::{Scale, SessionConfig, Timbre};

#[derive(Debug, Parser)]
#[command(name = "saavy-pad", version, about = "Touch-style synth pad for the terminal")]
struct Args {
    /// Scale ("vibe"): major, minor, blues, chromatic, pentatonic
    #[arg(long, default_value = "major")]
    scale: Scale,

    /// Sound preset: warm-pad, lofi-dreams, ethereal-bells, synth-wave, ambient-choir
    #[arg(long, default_value = "warm-pad")]
    sound: Timbre,

    /// Fade-in time constant of a new note, in seconds
    #[arg(long, default_value_t = 0.1)]
    attack: f32,

    /// Fade-out time constant of a released note, in seconds
    #[arg(long, default_value_t = 0.1)]
    release: f32,

    /// Seconds between releasing a note and stopping its oscillator
    #[arg(long, default_value_t = 0.2)]
    stop_delay: f32,

    /// Where to write logs [default: <temp dir>/saavy-pad.log]
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .attack(self.attack)
            .release(self.release)
            .stop_delay(self.stop_delay)
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();

    init_logging(args.log_file.clone())?;
    log::info!("starting with scale {} and sound {}", args.scale.name(), args.sound.name());

    PadApp::new()
        .scale(args.scale)
        .timbre(args.sound)
        .config(args.session_config())
        .run()
}

fn init_logging(path: Option<PathBuf>) -> EyreResult<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("saavy-pad.log"));
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
