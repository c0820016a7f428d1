//! # Difficulty Levels
//!
//! The fixed set of difficulty levels for the memory game. Each level pins
//! down the number range the target is drawn from, how long the number stays
//! on screen, and (derived from that) how many points a win is worth.

use crate::config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A difficulty level for the memory game.
///
/// Selectable only before a round starts. Harder levels use a wider number
/// range and a shorter reveal window, and pay out fewer points since the
/// score is proportional to the reveal time.
///
/// # Examples
///
/// ```
/// use mnemo::Difficulty;
///
/// let d = Difficulty::Medium;
/// assert_eq!(d.range(), 0..=1000);
/// assert_eq!(d.reveal_secs(), 6);
/// assert_eq!(d.point_value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Human-readable name shown in the difficulty selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }

    /// Inclusive range the target number is drawn from.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 0..=100,
            Difficulty::Medium => 0..=1000,
            Difficulty::Hard => 0..=10_000,
            Difficulty::Extreme => 0..=100_000,
        }
    }

    /// Seconds the target number stays visible before guessing starts.
    pub fn reveal_secs(self) -> u64 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 6,
            Difficulty::Hard => 4,
            Difficulty::Extreme => 3,
        }
    }

    /// Points awarded for a correct guess at this difficulty.
    pub fn point_value(self) -> u32 {
        self.reveal_secs() as u32 * config::POINTS_PER_REVEAL_SECOND
    }

    /// Returns all difficulty levels in ascending order.
    pub fn all() -> Vec<Difficulty> {
        vec![
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Extreme,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Parses a difficulty from user or CLI input, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_match_levels() {
        assert_eq!(Difficulty::Easy.range(), 0..=100);
        assert_eq!(Difficulty::Medium.range(), 0..=1000);
        assert_eq!(Difficulty::Hard.range(), 0..=10_000);
        assert_eq!(Difficulty::Extreme.range(), 0..=100_000);
    }

    #[test]
    fn test_reveal_times_shrink_with_difficulty() {
        let all = Difficulty::all();
        for pair in all.windows(2) {
            assert!(pair[0].reveal_secs() > pair[1].reveal_secs());
        }
    }

    #[test]
    fn test_point_values() {
        assert_eq!(Difficulty::Easy.point_value(), 80);
        assert_eq!(Difficulty::Medium.point_value(), 60);
        assert_eq!(Difficulty::Hard.point_value(), 40);
        assert_eq!(Difficulty::Extreme.point_value(), 30);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("EXTREME".parse::<Difficulty>().unwrap(), Difficulty::Extreme);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
