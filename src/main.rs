//! # Mnemo Main Entry Point
//!
//! Parses the command line, initializes logging, and runs the scene loop on
//! a current-thread runtime. One logical thread of control is all the game
//! needs: every timer is a cooperative suspension inside the session actor.

use clap::Parser;
use log::{info, warn, LevelFilter};
use mnemo::{Difficulty, MnemoResult, SceneManager};
use std::time::{SystemTime, UNIX_EPOCH};

/// Command line arguments for the Mnemo application.
#[derive(Parser, Debug)]
#[command(name = "mnemo")]
#[command(about = "A terminal number-recall memory game with a call simulator")]
#[command(version)]
struct Args {
    /// Random seed for target-number generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting difficulty (easy, medium, hard, extreme)
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> MnemoResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Mnemo v{}", mnemo::VERSION);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(12345)
    });

    let difficulty = match args.difficulty.parse::<Difficulty>() {
        Ok(difficulty) => difficulty,
        Err(e) => {
            warn!("{}; falling back to medium", e);
            Difficulty::Medium
        }
    };

    info!("seed: {}, difficulty: {}", seed, difficulty);

    let mut scenes = SceneManager::new(seed, difficulty);
    scenes.run().await
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();
}
