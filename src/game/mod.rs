//! # Game Module
//!
//! The guess-the-number memory game: difficulty levels, the round state
//! machine, hint derivation, and the async session driver.
//!
//! The split mirrors how the pieces are exercised:
//! - `difficulty` and `hints` are pure data and pure functions
//! - `state` is the synchronous state machine (no timers, no I/O)
//! - `session` owns a state and drives its timed transitions

pub mod difficulty;
pub mod hints;
pub mod session;
pub mod state;

pub use difficulty::*;
pub use hints::*;
pub use session::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type SessionId = Uuid;

/// Creates a new unique session ID.
pub fn new_session_id() -> SessionId {
    Uuid::new_v4()
}

/// Importance of a notice, used by the display to decide emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageImportance {
    /// Routine feedback (hints, reminders)
    Normal,
    /// Something the player should not miss (win, loss)
    Critical,
}

/// A short human-readable message emitted by the game for the player.
///
/// Notices are the game's only channel for transient feedback: invalid-input
/// warnings, per-attempt hints, and win/loss announcements. They carry no
/// state; the current [`GameState`] snapshot is published separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The message text
    pub text: String,
    /// How prominently the message should be shown
    pub importance: MessageImportance,
}

impl Notice {
    /// Creates a routine notice.
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            importance: MessageImportance::Normal,
        }
    }

    /// Creates a critical notice.
    pub fn critical(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            importance: MessageImportance::Critical,
        }
    }
}
