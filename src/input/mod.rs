//! # Input Module
//!
//! Parses raw text lines from the terminal into player commands. What a
//! line means depends on the active scene: "start" is a call-screen verb,
//! while on the game screen almost anything that is not a keyword is a
//! guess (validation of the guess itself belongs to the game core, not the
//! parser).

use crate::{Difficulty, SceneType};

/// Player commands produced from raw input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Navigate from home to the call simulator
    OpenCallSimulator,
    /// Navigate from home to the memory game
    OpenGuessTheNumber,
    /// Start the simulated call
    StartCall,
    /// Stop the simulated call
    StopCall,
    /// Restart the round at a difficulty (before the reveal or after a round)
    SelectDifficulty(Difficulty),
    /// Submit the line as a guess
    Guess(String),
    /// Play another round, keeping the score
    PlayAgain,
    /// Print the raw state snapshot (debug)
    DumpState,
    /// Return to the home screen
    Back,
    /// Show scene-specific help
    Help,
    /// Exit the application
    Quit,
}

/// Input handler turning text lines into [`PlayerInput`] values.
///
/// # Examples
///
/// ```
/// use mnemo::{InputHandler, PlayerInput, SceneType};
///
/// let handler = InputHandler::new();
/// let input = handler.parse_line(SceneType::Home, "1");
/// assert_eq!(input, Some(PlayerInput::OpenCallSimulator));
/// ```
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Parses one input line in the context of the active scene.
    ///
    /// Returns `None` for blank lines. On the game scene, lines that match
    /// no keyword are passed through verbatim as guesses; the state machine
    /// decides whether they parse as numbers.
    pub fn parse_line(&self, scene: SceneType, line: &str) -> Option<PlayerInput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let word = trimmed.to_lowercase();

        match word.as_str() {
            "q" | "quit" | "exit" => return Some(PlayerInput::Quit),
            "b" | "back" => return Some(PlayerInput::Back),
            "h" | "help" | "?" => return Some(PlayerInput::Help),
            _ => {}
        }

        match scene {
            SceneType::Home => match word.as_str() {
                "1" | "call" => Some(PlayerInput::OpenCallSimulator),
                "2" | "game" | "guess" => Some(PlayerInput::OpenGuessTheNumber),
                _ => None,
            },
            SceneType::CallSimulator => match word.as_str() {
                "call" | "start" | "c" => Some(PlayerInput::StartCall),
                "stop" | "s" => Some(PlayerInput::StopCall),
                _ => None,
            },
            SceneType::GuessTheNumber => match word.as_str() {
                "play" | "again" | "p" => Some(PlayerInput::PlayAgain),
                "dump" => Some(PlayerInput::DumpState),
                _ => {
                    if let Ok(difficulty) = word.parse::<Difficulty>() {
                        Some(PlayerInput::SelectDifficulty(difficulty))
                    } else {
                        Some(PlayerInput::Guess(trimmed.to_string()))
                    }
                }
            },
        }
    }
}
