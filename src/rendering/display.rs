//! # Display Management
//!
//! Text rendering of the application screens. Each render method produces a
//! complete string for the scene so callers decide when and where to print;
//! this also keeps every view directly assertable in tests.

use crate::{config, Difficulty, GameState, GameStatus, MessageImportance, Notice};
use std::fmt::Write;

/// Terminal display manager.
///
/// Keeps a bounded message history (the notice sink) and the currently
/// active hint text, and renders each scene as a block of text.
pub struct TerminalDisplay {
    /// Message history, newest last
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Hint text shown on the playing view while the hint window is open
    pub active_hint: Option<String>,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDisplay {
    /// Creates a new display manager.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: config::MAX_MESSAGES,
            active_hint: None,
        }
    }

    /// Appends a message to the history, trimming the oldest past the cap.
    pub fn add_message(&mut self, text: String) {
        self.messages.push(text);
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    /// Records a notice in the history, emphasising critical ones.
    pub fn add_notice(&mut self, notice: &Notice) {
        let line = match notice.importance {
            MessageImportance::Normal => notice.text.clone(),
            MessageImportance::Critical => format!("*** {} ***", notice.text),
        };
        self.add_message(line);
    }

    /// Sets or clears the hint text for the playing view.
    pub fn set_active_hint(&mut self, hint: Option<String>) {
        self.active_hint = hint;
    }

    /// Returns the most recent message, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Renders the home screen with the two project cards.
    pub fn render_home(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== My Projects ===");
        let _ = writeln!(out, "Pick one of the mini apps:");
        let _ = writeln!(out);
        let _ = writeln!(out, "  [1] Call Simulator   - start a ring tone with control");
        let _ = writeln!(out, "  [2] Guess the Number - a game to test your memory");
        let _ = writeln!(out);
        let _ = writeln!(out, "(1/2 to open, 'quit' to exit)");
        out
    }

    /// Renders the call-simulator screen for the given call flag.
    pub fn render_call(&self, calling: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Call Simulator ===");
        if calling {
            let _ = writeln!(out, "Calling...");
            let _ = writeln!(out, "('stop' to end the call, 'back' to leave)");
        } else {
            let _ = writeln!(out, "Press 'call' to start ringing");
            let _ = writeln!(out, "('back' to leave)");
        }
        out
    }

    /// Renders the game screen for the current state snapshot.
    pub fn render_game(&self, state: &GameState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Guess the Number ===");
        let _ = writeln!(
            out,
            "Score: {}  Level: {}  Attempts: {}/{}",
            state.score, state.level, state.attempts, state.max_attempts
        );
        let _ = writeln!(out);

        match state.status {
            GameStatus::Preparing => {
                let _ = writeln!(out, "Preparing the game... get your memory ready!");
                let _ = writeln!(out);
                let _ = writeln!(out, "Difficulty (type a name to switch):");
                for difficulty in Difficulty::all() {
                    let marker = if difficulty == state.difficulty {
                        ">"
                    } else {
                        " "
                    };
                    let _ = writeln!(
                        out,
                        " {} {:<8} 0-{:<6} {}s",
                        marker,
                        difficulty.display_name(),
                        difficulty.range().end(),
                        difficulty.reveal_secs()
                    );
                }
            }
            GameStatus::Showing => {
                let _ = writeln!(out, "        +--------------+");
                let _ = writeln!(out, "          {:^10}", state.target_number);
                let _ = writeln!(out, "        +--------------+");
                let _ = writeln!(
                    out,
                    "Memorize it! It disappears in {}s",
                    state.difficulty.reveal_secs()
                );
            }
            GameStatus::Playing => {
                let _ = writeln!(out, "What was the number?");
                let _ = writeln!(out, "Type the number you saw and press enter.");
                if !state.user_guess.is_empty() {
                    let _ = writeln!(out, "Current guess: {}", state.user_guess);
                }
                if state.show_hint {
                    if let Some(hint) = &self.active_hint {
                        let _ = writeln!(out);
                        let _ = writeln!(out, "  [hint] {}", hint);
                    }
                }
            }
            GameStatus::Won => {
                let _ = writeln!(out, "Congratulations! You guessed it!");
                let _ = writeln!(out, "Total score: {}", state.score);
                let _ = writeln!(out, "('play' for another round)");
            }
            GameStatus::Lost => {
                let _ = writeln!(out, "Oh no! You could not guess the number.");
                let _ = writeln!(out, "The number was: {}", state.target_number);
                let _ = writeln!(out, "Final score: {}", state.score);
                let _ = writeln!(out, "Don't give up - try again! ('play')");
            }
            GameStatus::Paused => {
                let _ = writeln!(out, "Paused.");
            }
        }

        out
    }
}
