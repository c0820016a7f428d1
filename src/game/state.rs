//! # Game State Module
//!
//! The round state machine for the memory game.
//!
//! A [`GameState`] is a value snapshot owned by exactly one session. Every
//! transition mutates the snapshot in place and the session re-publishes it
//! wholesale, so the rendering layer only ever sees complete states. All
//! timing (the prepare delay, the reveal window, the hint auto-clear) lives
//! in the session driver; the methods here are synchronous and total over
//! their preconditions.

use crate::{
    config, hint_direction, hint_message, proximity_hint, Difficulty, HintDirection, MnemoError,
    MnemoResult, ProximityHint,
};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Status of the current round, driving which view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is starting; difficulty is still selectable
    Preparing,
    /// The target number is on screen
    Showing,
    /// The number is hidden and guesses are accepted
    Playing,
    /// The last guess matched the target
    Won,
    /// All attempts used without a match
    Lost,
    /// Reserved; no transition currently produces this status
    Paused,
}

/// Complete state of one memory-game session.
///
/// Round-scoped fields (`target_number`, `user_guess`, `attempts`, `status`,
/// `show_hint`) reset on every new round; `score` accumulates across rounds
/// within the session and is discarded with it.
///
/// # Examples
///
/// ```
/// use mnemo::{Difficulty, GameState, GameStatus};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(12345);
/// let state = GameState::new(Difficulty::Medium, &mut rng);
/// assert_eq!(state.status, GameStatus::Preparing);
/// assert_eq!(state.attempts, 0);
/// assert!(Difficulty::Medium.range().contains(&state.target_number));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The secret value for the current round
    pub target_number: i32,
    /// The player's current input buffer
    pub user_guess: String,
    /// Guesses made this round
    pub attempts: u32,
    /// Cap on guesses per round
    pub max_attempts: u32,
    /// Cumulative score for this session
    pub score: u32,
    /// Latent level counter; always 1 in this version
    pub level: u32,
    /// Current round status
    pub status: GameStatus,
    /// Whether a hint is currently visible
    pub show_hint: bool,
    /// Difficulty the current round was started with
    pub difficulty: Difficulty,
}

/// Result of submitting a guess, reported back to the caller so it can
/// surface the right transient message. Parse failures are an outcome, not
/// an error: the state is untouched and no attempt is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Input did not parse as an integer; nothing changed
    Invalid,
    /// Correct guess; the round is won and `points` were added to the score
    Won { points: u32 },
    /// Wrong guess with attempts remaining; a hint window has opened
    Incorrect {
        direction: HintDirection,
        proximity: ProximityHint,
        attempts_left: u32,
    },
    /// Wrong guess on the final attempt; the round is lost
    Lost { target: i32 },
}

impl GameState {
    /// Creates the state for a fresh session at the given difficulty.
    ///
    /// The target is drawn immediately so the snapshot is playable as soon
    /// as the reveal timers run.
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let target_number = rng.gen_range(difficulty.range());
        debug!("new session at {}: target drawn", difficulty);
        Self {
            target_number,
            user_guess: String::new(),
            attempts: 0,
            max_attempts: config::MAX_ATTEMPTS,
            score: 0,
            level: 1,
            status: GameStatus::Preparing,
            show_hint: false,
            difficulty,
        }
    }

    /// Starts a new round, discarding round-scoped fields but keeping the
    /// score.
    ///
    /// Allowed from `Preparing` (re-selecting difficulty before the reveal)
    /// and from `Won`/`Lost` (the "play again" action). A new target is
    /// drawn uniformly from the difficulty's range.
    pub fn start_new_round(
        &mut self,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> MnemoResult<()> {
        match self.status {
            GameStatus::Preparing | GameStatus::Won | GameStatus::Lost => {}
            other => {
                return Err(MnemoError::InvalidAction(format!(
                    "cannot start a new round while {:?}",
                    other
                )))
            }
        }

        self.difficulty = difficulty;
        self.target_number = rng.gen_range(difficulty.range());
        self.user_guess.clear();
        self.attempts = 0;
        self.show_hint = false;
        self.status = GameStatus::Preparing;
        debug!("round started at {} (score carried: {})", difficulty, self.score);
        Ok(())
    }

    /// Reveals the target number (`Preparing` -> `Showing`).
    ///
    /// Timer-driven; anywhere else this fires the machine is in an invalid
    /// state, not reacting to a bad player action.
    pub fn begin_reveal(&mut self) -> MnemoResult<()> {
        if self.status != GameStatus::Preparing {
            return Err(MnemoError::InvalidState(format!(
                "cannot reveal while {:?}",
                self.status
            )));
        }
        self.status = GameStatus::Showing;
        Ok(())
    }

    /// Hides the target number and opens guessing (`Showing` -> `Playing`).
    ///
    /// Timer-driven, like [`GameState::begin_reveal`].
    pub fn hide_number(&mut self) -> MnemoResult<()> {
        if self.status != GameStatus::Showing {
            return Err(MnemoError::InvalidState(format!(
                "cannot hide the number while {:?}",
                self.status
            )));
        }
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Replaces the player's input buffer (the typed-but-unsubmitted line).
    pub fn set_user_guess(&mut self, text: impl Into<String>) {
        self.user_guess = text.into();
    }

    /// Submits a guess while `Playing` and applies the transition table.
    ///
    /// Unparsable input returns [`GuessOutcome::Invalid`] with zero state
    /// mutation: no attempt is consumed, no status or score change. A wrong
    /// guess before the final attempt increments `attempts`, clears the
    /// input buffer, and opens the hint window; a wrong guess on the final
    /// attempt loses the round; a correct guess wins it and adds
    /// `reveal_secs * 10` points.
    pub fn submit_guess(&mut self, raw: &str) -> MnemoResult<GuessOutcome> {
        if self.status != GameStatus::Playing {
            return Err(MnemoError::InvalidAction(format!(
                "cannot guess while {:?}",
                self.status
            )));
        }

        let guess: i32 = match raw.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                debug!("unparsable guess: {:?}", raw);
                return Ok(GuessOutcome::Invalid);
            }
        };

        if guess == self.target_number {
            let points = self.difficulty.point_value();
            self.score += points;
            self.user_guess = raw.trim().to_string();
            self.status = GameStatus::Won;
            debug!("round won: +{} points, score {}", points, self.score);
            return Ok(GuessOutcome::Won { points });
        }

        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            self.status = GameStatus::Lost;
            debug!("round lost: target was {}", self.target_number);
            return Ok(GuessOutcome::Lost {
                target: self.target_number,
            });
        }

        self.user_guess.clear();
        self.show_hint = true;
        Ok(GuessOutcome::Incorrect {
            direction: hint_direction(guess, self.target_number),
            proximity: proximity_hint(guess, self.target_number),
            attempts_left: self.max_attempts - self.attempts,
        })
    }

    /// Closes the hint window (driven by the session's hint timer).
    pub fn clear_hint(&mut self) {
        self.show_hint = false;
    }

    /// Whether the round has reached a terminal status.
    pub fn is_round_over(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }

    /// Attempts remaining this round.
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Composes the hint text for the last wrong guess, if a hint is open.
    ///
    /// Mirrors the display logic: a hint is only rendered while `show_hint`
    /// holds, and derives from the submitted guess, never from state.
    pub fn current_hint(&self, last_guess: i32) -> Option<String> {
        if self.show_hint {
            Some(hint_message(last_guess, self.target_number))
        } else {
            None
        }
    }

    /// Serialises the snapshot to pretty JSON for debug inspection.
    pub fn snapshot_json(&self) -> MnemoResult<String> {
        serde_json::to_string_pretty(self).map_err(MnemoError::from)
    }
}
