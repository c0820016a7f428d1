//! # Mnemo
//!
//! A small terminal application built around a number-recall memory game,
//! with a phone-call simulator as a second mini-project.
//!
//! ## Architecture Overview
//!
//! Mnemo is organised around a handful of small, well-separated systems:
//!
//! - **Game State**: a value-snapshot state machine for one game session
//! - **Session Driver**: an async actor that owns the state and its timers
//! - **Scene System**: navigation between the home, call, and game screens
//! - **Input System**: text-line parsing into player commands
//! - **Rendering System**: terminal views of each scene and game status
//!
//! The game core is deliberately pure: every timed transition lives in the
//! session driver, so the state machine itself can be exercised directly in
//! tests with no runtime at all.

pub mod game;
pub mod input;
pub mod rendering;
pub mod ringtone;
pub mod scenes;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use ringtone::*;
pub use scenes::*;

/// Core error type for the Mnemo application.
#[derive(thiserror::Error, Debug)]
pub enum MnemoError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed in the current status
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Result type used throughout the Mnemo codebase.
pub type MnemoResult<T> = Result<T, MnemoError>;

/// Version information for the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    use std::time::Duration;

    /// Guesses allowed per round
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Delay between round start and the number reveal
    pub const PREPARE_DELAY: Duration = Duration::from_secs(1);

    /// How long a hint stays on screen after a wrong guess
    pub const HINT_DISPLAY: Duration = Duration::from_secs(3);

    /// Points awarded per second of reveal time on a correct guess
    pub const POINTS_PER_REVEAL_SECOND: u32 = 10;

    /// Proximity hint threshold: "very close"
    pub const VERY_CLOSE_DISTANCE: i64 = 10;

    /// Proximity hint threshold: "close"
    pub const CLOSE_DISTANCE: i64 = 50;

    /// Proximity hint threshold: "far" (beyond this is "very far")
    pub const FAR_DISTANCE: i64 = 100;

    /// Maximum messages kept in the display history
    pub const MAX_MESSAGES: usize = 100;
}
