//! # Session Driver
//!
//! Owns one [`GameState`] and drives its timed transitions.
//!
//! A session is a single-threaded actor: commands arrive on a channel,
//! snapshots leave on a `watch` channel, and transient notices on their own
//! channel. The three timers the game needs (the 1 s prepare delay, the
//! difficulty-specific reveal window, and the 3 s hint auto-clear) are
//! deadlines inside the actor's `select!` loop, so they are cancelled
//! implicitly when the session is dropped. Nothing outside the actor ever
//! mutates the state.

use crate::{
    config, hint_text, new_session_id, Difficulty, GameState, GameStatus, GuessOutcome,
    MnemoResult, Notice, SessionId,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Duration, Instant};

/// Commands the rendering/input layer can send into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Restart the round at a new difficulty (Preparing/Won/Lost only)
    SelectDifficulty(Difficulty),
    /// Replace the input buffer without submitting
    SetGuess(String),
    /// Submit a guess for the current round
    SubmitGuess(String),
    /// Play another round at the current difficulty, keeping the score
    PlayAgain,
    /// End the session
    Quit,
}

/// The caller-side endpoints of a running session.
pub struct SessionHandle {
    /// Session identifier, for logging and diagnostics
    pub id: SessionId,
    /// Command input
    pub commands: mpsc::UnboundedSender<SessionCommand>,
    /// Latest state snapshot; updated after every transition
    pub snapshots: watch::Receiver<GameState>,
    /// Transient player-facing messages
    pub notices: mpsc::UnboundedReceiver<Notice>,
}

/// The actor that owns a game state and its timers.
pub struct GameSession {
    id: SessionId,
    state: GameState,
    rng: StdRng,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    snapshots: watch::Sender<GameState>,
    notices: mpsc::UnboundedSender<Notice>,
    /// When the next automatic status transition fires, if one is pending
    status_deadline: Option<Instant>,
    /// When the open hint window closes, if one is open
    hint_deadline: Option<Instant>,
}

impl GameSession {
    /// Creates a session and its handle without starting it.
    ///
    /// Useful in tests that want to run the actor on the current task;
    /// normal callers use [`GameSession::spawn`].
    pub fn new(difficulty: Difficulty, seed: u64) -> (Self, SessionHandle) {
        let id = new_session_id();
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(difficulty, &mut rng);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();

        info!("session {} created at {}", id, difficulty);

        let session = Self {
            id,
            state,
            rng,
            commands: command_rx,
            snapshots: snapshot_tx,
            notices: notice_tx,
            status_deadline: None,
            hint_deadline: None,
        };
        let handle = SessionHandle {
            id,
            commands: command_tx,
            snapshots: snapshot_rx,
            notices: notice_rx,
        };
        (session, handle)
    }

    /// Creates a session and runs it on a new task.
    pub fn spawn(difficulty: Difficulty, seed: u64) -> SessionHandle {
        let (session, handle) = Self::new(difficulty, seed);
        tokio::spawn(session.run());
        handle
    }

    /// Runs the session until its command channel closes or `Quit` arrives.
    pub async fn run(mut self) {
        self.arm_status_timer();
        self.publish();

        loop {
            let status_deadline = self.status_deadline;
            let hint_deadline = self.hint_deadline;

            tokio::select! {
                cmd = self.commands.recv() => {
                    match cmd {
                        None | Some(SessionCommand::Quit) => break,
                        Some(cmd) => {
                            if let Err(e) = self.handle_command(cmd) {
                                self.notify(Notice::normal(e.to_string()));
                            }
                        }
                    }
                }
                _ = sleep_until(status_deadline.unwrap_or_else(far_future)),
                    if status_deadline.is_some() =>
                {
                    self.on_status_timer();
                }
                _ = sleep_until(hint_deadline.unwrap_or_else(far_future)),
                    if hint_deadline.is_some() =>
                {
                    self.hint_deadline = None;
                    self.state.clear_hint();
                    self.publish();
                }
            }
        }

        info!("session {} ended with score {}", self.id, self.state.score);
    }

    /// Applies one command to the state machine.
    fn handle_command(&mut self, cmd: SessionCommand) -> MnemoResult<()> {
        match cmd {
            SessionCommand::SelectDifficulty(difficulty) => {
                self.state.start_new_round(difficulty, &mut self.rng)?;
                self.hint_deadline = None;
                self.arm_status_timer();
                self.publish();
            }
            SessionCommand::SetGuess(text) => {
                self.state.set_user_guess(text);
                self.publish();
            }
            SessionCommand::SubmitGuess(raw) => {
                let outcome = self.state.submit_guess(&raw)?;
                self.report_outcome(outcome);
            }
            SessionCommand::PlayAgain => {
                let difficulty = self.state.difficulty;
                self.state.start_new_round(difficulty, &mut self.rng)?;
                self.hint_deadline = None;
                self.arm_status_timer();
                self.publish();
            }
            // Quit is handled by the run loop
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    /// Turns a guess outcome into notices, timers, and a fresh snapshot.
    fn report_outcome(&mut self, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Invalid => {
                // No transition happened; warn without re-publishing.
                self.notify(Notice::normal("Please enter a valid number"));
            }
            GuessOutcome::Won { points } => {
                self.status_deadline = None;
                self.hint_deadline = None;
                self.notify(Notice::critical(format!("Correct! +{} points", points)));
                self.publish();
            }
            GuessOutcome::Incorrect {
                direction,
                proximity,
                attempts_left,
            } => {
                self.hint_deadline = Some(Instant::now() + config::HINT_DISPLAY);
                self.notify(Notice::normal(format!(
                    "{} ({} attempts left)",
                    hint_text(direction, proximity),
                    attempts_left
                )));
                self.publish();
            }
            GuessOutcome::Lost { target } => {
                self.status_deadline = None;
                self.hint_deadline = None;
                self.notify(Notice::critical(format!(
                    "You lost! The number was {}",
                    target
                )));
                self.publish();
            }
        }
    }

    /// Fires the pending automatic status transition.
    fn on_status_timer(&mut self) {
        match self.state.status {
            GameStatus::Preparing => {
                if self.state.begin_reveal().is_ok() {
                    let reveal = Duration::from_secs(self.state.difficulty.reveal_secs());
                    self.status_deadline = Some(Instant::now() + reveal);
                    debug!("session {}: revealing for {:?}", self.id, reveal);
                    self.publish();
                }
            }
            GameStatus::Showing => {
                if self.state.hide_number().is_ok() {
                    self.status_deadline = None;
                    debug!("session {}: number hidden, guessing open", self.id);
                    self.publish();
                }
            }
            _ => {
                self.status_deadline = None;
            }
        }
    }

    /// Arms the prepare-delay timer for a round in `Preparing`.
    fn arm_status_timer(&mut self) {
        if self.state.status == GameStatus::Preparing {
            self.status_deadline = Some(Instant::now() + config::PREPARE_DELAY);
        }
    }

    /// Publishes the current snapshot to the rendering layer.
    fn publish(&self) {
        let _ = self.snapshots.send(self.state.clone());
    }

    /// Sends a transient notice, tolerating a departed listener.
    fn notify(&self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            warn!("session {}: notice listener dropped", self.id);
        }
    }
}

/// A deadline that never fires within a session's lifetime; used to give
/// disabled `select!` branches a value to hold.
fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(60 * 60 * 24 * 365)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageImportance;

    async fn wait_for_status(
        snapshots: &mut watch::Receiver<GameState>,
        status: GameStatus,
    ) -> GameState {
        loop {
            let snapshot = snapshots.borrow_and_update().clone();
            if snapshot.status == status {
                return snapshot;
            }
            snapshots.changed().await.expect("session closed");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_reveals_then_hides() {
        let start = Instant::now();
        let mut handle = GameSession::spawn(Difficulty::Extreme, 7);

        wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;
        assert!(Instant::now() - start >= config::PREPARE_DELAY);

        wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;
        let elapsed = Instant::now() - start;
        assert!(elapsed >= config::PREPARE_DELAY + Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hint_auto_clears_after_window() {
        let mut handle = GameSession::spawn(Difficulty::Easy, 11);
        let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        // A guaranteed-wrong, non-final guess opens the hint window.
        let wrong = if snapshot.target_number == 0 { "1" } else { "0" };
        handle
            .commands
            .send(SessionCommand::SubmitGuess(wrong.to_string()))
            .unwrap();

        loop {
            handle.snapshots.changed().await.unwrap();
            if handle.snapshots.borrow_and_update().show_hint {
                break;
            }
        }

        let hint_opened = Instant::now();
        loop {
            handle.snapshots.changed().await.unwrap();
            if !handle.snapshots.borrow_and_update().show_hint {
                break;
            }
        }
        assert!(Instant::now() - hint_opened >= config::HINT_DISPLAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_guess_emits_notice_only() {
        let mut handle = GameSession::spawn(Difficulty::Medium, 23);
        let before = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        handle
            .commands
            .send(SessionCommand::SubmitGuess("not a number".to_string()))
            .unwrap();

        let notice = handle.notices.recv().await.unwrap();
        assert_eq!(notice.text, "Please enter a valid number");
        assert_eq!(notice.importance, MessageImportance::Normal);

        // No snapshot was published for the non-transition.
        let after = handle.snapshots.borrow_and_update().clone();
        assert_eq!(after, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_guess_wins_with_notice() {
        let mut handle = GameSession::spawn(Difficulty::Medium, 31);
        let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        handle
            .commands
            .send(SessionCommand::SubmitGuess(snapshot.target_number.to_string()))
            .unwrap();

        let won = wait_for_status(&mut handle.snapshots, GameStatus::Won).await;
        assert_eq!(won.score, Difficulty::Medium.point_value());

        let notice = handle.notices.recv().await.unwrap();
        assert_eq!(notice.importance, MessageImportance::Critical);
        assert!(notice.text.contains("+60 points"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_again_starts_fresh_round_keeping_score() {
        let mut handle = GameSession::spawn(Difficulty::Hard, 47);
        let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        handle
            .commands
            .send(SessionCommand::SubmitGuess(snapshot.target_number.to_string()))
            .unwrap();
        let won = wait_for_status(&mut handle.snapshots, GameStatus::Won).await;

        handle.commands.send(SessionCommand::PlayAgain).unwrap();
        let fresh = wait_for_status(&mut handle.snapshots, GameStatus::Preparing).await;
        assert_eq!(fresh.score, won.score);
        assert_eq!(fresh.attempts, 0);
        assert!(fresh.user_guess.is_empty());

        // The new round runs its timers again.
        wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_difficulty_selection_restarts_preparing() {
        let mut handle = GameSession::spawn(Difficulty::Easy, 53);

        handle
            .commands
            .send(SessionCommand::SelectDifficulty(Difficulty::Extreme))
            .unwrap();

        let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;
        assert_eq!(snapshot.difficulty, Difficulty::Extreme);
        assert!(Difficulty::Extreme.range().contains(&snapshot.target_number));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_guess_updates_published_buffer() {
        let mut handle = GameSession::spawn(Difficulty::Medium, 61);
        wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        handle
            .commands
            .send(SessionCommand::SetGuess("45".to_string()))
            .unwrap();

        handle.snapshots.changed().await.unwrap();
        assert_eq!(handle.snapshots.borrow_and_update().user_guess, "45");
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_guess_notice_matches_hint_message() {
        let mut handle = GameSession::spawn(Difficulty::Medium, 67);
        let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        let wrong = if snapshot.target_number == 0 { 1 } else { 0 };
        handle
            .commands
            .send(SessionCommand::SubmitGuess(wrong.to_string()))
            .unwrap();

        let notice = handle.notices.recv().await.unwrap();
        let expected = crate::hint_message(wrong, snapshot.target_number);
        assert!(notice.text.starts_with(&expected), "got: {}", notice.text);
        assert!(notice.text.ends_with("(2 attempts left)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_turn_command_reports_invalid_action() {
        let mut handle = GameSession::spawn(Difficulty::Easy, 59);
        wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

        // The round is live; restarting is not allowed until it ends.
        handle
            .commands
            .send(SessionCommand::SelectDifficulty(Difficulty::Hard))
            .unwrap();

        let notice = handle.notices.recv().await.unwrap();
        assert!(notice.text.contains("Invalid action"));
    }
}
