//! # Hint Derivation
//!
//! Pure functions that turn a wrong guess into player-facing hints. Nothing
//! here mutates game state; the state machine decides *when* a hint is
//! shown, these functions decide *what* it says.

use crate::config;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Which direction the next guess should move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintDirection {
    /// The target is larger than the guess
    Higher,
    /// The target is smaller than the guess
    Lower,
}

impl fmt::Display for HintDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintDirection::Higher => write!(f, "higher"),
            HintDirection::Lower => write!(f, "lower"),
        }
    }
}

/// Qualitative distance between a guess and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityHint {
    /// Within 10 of the target
    VeryClose,
    /// Within 50 of the target
    Close,
    /// Within 100 of the target
    Far,
    /// More than 100 away
    VeryFar,
}

impl fmt::Display for ProximityHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProximityHint::VeryClose => write!(f, "very close!"),
            ProximityHint::Close => write!(f, "close"),
            ProximityHint::Far => write!(f, "far"),
            ProximityHint::VeryFar => write!(f, "very far"),
        }
    }
}

/// Returns the direction the target lies in relative to a wrong guess.
///
/// # Examples
///
/// ```
/// use mnemo::{hint_direction, HintDirection};
///
/// assert_eq!(hint_direction(300, 457), HintDirection::Higher);
/// assert_eq!(hint_direction(500, 457), HintDirection::Lower);
/// ```
pub fn hint_direction(guess: i32, target: i32) -> HintDirection {
    match guess.cmp(&target) {
        Ordering::Less => HintDirection::Higher,
        _ => HintDirection::Lower,
    }
}

/// Buckets the absolute distance between guess and target.
///
/// Arithmetic is done in `i64` so extreme-range guesses cannot overflow.
pub fn proximity_hint(guess: i32, target: i32) -> ProximityHint {
    let distance = (guess as i64 - target as i64).abs();
    if distance <= config::VERY_CLOSE_DISTANCE {
        ProximityHint::VeryClose
    } else if distance <= config::CLOSE_DISTANCE {
        ProximityHint::Close
    } else if distance <= config::FAR_DISTANCE {
        ProximityHint::Far
    } else {
        ProximityHint::VeryFar
    }
}

/// Composes the hint wording for a known direction and proximity.
///
/// Single source of the "Wrong. Try ..." phrasing; both the open-hint view
/// and the per-attempt notice go through here.
pub fn hint_text(direction: HintDirection, proximity: ProximityHint) -> String {
    format!("Wrong. Try {} - you are {}", direction, proximity)
}

/// Composes the full hint message shown after a wrong-but-not-final guess.
pub fn hint_message(guess: i32, target: i32) -> String {
    hint_text(hint_direction(guess, target), proximity_hint(guess, target))
}
