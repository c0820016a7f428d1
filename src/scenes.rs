//! # Scene Management System
//!
//! A centralized system for routing between the application's screens:
//! the home menu, the call simulator, and the memory game. Each scene owns
//! its loop; navigation happens by returning control to the manager.

use crate::{
    CallSimulator, Difficulty, GameSession, InputHandler, MnemoResult, PlayerInput,
    SessionCommand, SessionHandle, TerminalDisplay,
};
use log::{debug, info};
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Represents the current scene in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Home menu listing the mini projects
    Home,
    /// Phone-call simulator
    CallSimulator,
    /// Guess-the-number memory game
    GuessTheNumber,
}

/// Line reader over standard input.
type InputLines = Lines<BufReader<Stdin>>;

/// The main scene manager that coordinates all application screens.
pub struct SceneManager {
    current_scene: SceneType,
    display: TerminalDisplay,
    input_handler: InputHandler,
    /// Base seed for game sessions
    seed: u64,
    /// Difficulty carried between game sessions
    difficulty: Difficulty,
    /// Number of game sessions started, used to vary per-session seeds
    sessions_started: u64,
}

impl SceneManager {
    /// Creates a new scene manager starting at the home screen.
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self {
            current_scene: SceneType::Home,
            display: TerminalDisplay::new(),
            input_handler: InputHandler::new(),
            seed,
            difficulty,
            sessions_started: 0,
        }
    }

    /// Runs the scene loop until the player exits.
    pub async fn run(&mut self) -> MnemoResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let exit = match self.current_scene {
                SceneType::Home => self.update_home_scene(&mut lines).await?,
                SceneType::CallSimulator => self.update_call_scene(&mut lines).await?,
                SceneType::GuessTheNumber => self.update_game_scene(&mut lines).await?,
            };
            if exit {
                break;
            }
        }

        info!("scene loop ended");
        Ok(())
    }

    /// Runs the home scene; returns true if exit is requested.
    async fn update_home_scene(&mut self, lines: &mut InputLines) -> MnemoResult<bool> {
        show(&self.display.render_home())?;

        loop {
            let Some(line) = lines.next_line().await? else {
                return Ok(true);
            };
            match self.input_handler.parse_line(SceneType::Home, &line) {
                Some(PlayerInput::Quit) => return Ok(true),
                Some(PlayerInput::OpenCallSimulator) => {
                    self.current_scene = SceneType::CallSimulator;
                    return Ok(false);
                }
                Some(PlayerInput::OpenGuessTheNumber) => {
                    self.current_scene = SceneType::GuessTheNumber;
                    return Ok(false);
                }
                Some(PlayerInput::Help) => {
                    show("Help: 1=call simulator, 2=guess the number, quit=exit\n")?;
                }
                _ => {
                    show("Pick 1 or 2 ('help' for options)\n")?;
                }
            }
        }
    }

    /// Runs the call-simulator scene; returns true if exit is requested.
    ///
    /// The simulator is scoped to this scene, so leaving it (back, quit, or
    /// end of input) drops it and the ring tone is guaranteed to stop.
    async fn update_call_scene(&mut self, lines: &mut InputLines) -> MnemoResult<bool> {
        let mut simulator = CallSimulator::with_terminal_bell();
        show(&self.display.render_call(simulator.is_calling()))?;

        loop {
            let Some(line) = lines.next_line().await? else {
                return Ok(true);
            };
            match self.input_handler.parse_line(SceneType::CallSimulator, &line) {
                Some(PlayerInput::Quit) => return Ok(true),
                Some(PlayerInput::Back) => {
                    self.current_scene = SceneType::Home;
                    return Ok(false);
                }
                Some(PlayerInput::StartCall) => simulator.start_call()?,
                Some(PlayerInput::StopCall) => simulator.stop_call(),
                Some(PlayerInput::Help) => {
                    show("Help: 'call' to ring, 'stop' to stop, 'back' to leave\n")?;
                    continue;
                }
                _ => continue,
            }
            show(&self.display.render_call(simulator.is_calling()))?;
        }
    }

    /// Runs the memory-game scene; returns true if exit is requested.
    ///
    /// Spawns a fresh game session and pumps three sources concurrently:
    /// input lines, state snapshots, and notices. Leaving the scene drops
    /// the handle, which closes the command channel and ends the session
    /// along with any pending timers.
    async fn update_game_scene(&mut self, lines: &mut InputLines) -> MnemoResult<bool> {
        let session_seed = self
            .seed
            .wrapping_add(self.sessions_started.wrapping_mul(1000));
        self.sessions_started += 1;

        let SessionHandle {
            id,
            commands,
            mut snapshots,
            mut notices,
        } = GameSession::spawn(self.difficulty, session_seed);
        debug!("game scene opened session {}", id);

        self.display.set_active_hint(None);
        let mut last_guess: Option<i32> = None;
        show(&self.display.render_game(&snapshots.borrow().clone()))?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        return Ok(true);
                    };
                    match self.input_handler.parse_line(SceneType::GuessTheNumber, &line) {
                        Some(PlayerInput::Quit) => return Ok(true),
                        Some(PlayerInput::Back) => {
                            self.current_scene = SceneType::Home;
                            return Ok(false);
                        }
                        Some(PlayerInput::Help) => {
                            show(
                                "Help: type a number to guess, a difficulty name before the \
                                 reveal, 'play' after a round, 'back' to leave\n",
                            )?;
                        }
                        Some(PlayerInput::SelectDifficulty(difficulty)) => {
                            self.difficulty = difficulty;
                            let _ = commands.send(SessionCommand::SelectDifficulty(difficulty));
                        }
                        Some(PlayerInput::Guess(raw)) => {
                            last_guess = raw.trim().parse().ok();
                            // Echo the line into the input buffer, then submit it.
                            let _ = commands.send(SessionCommand::SetGuess(raw.clone()));
                            let _ = commands.send(SessionCommand::SubmitGuess(raw));
                        }
                        Some(PlayerInput::PlayAgain) => {
                            let _ = commands.send(SessionCommand::PlayAgain);
                        }
                        Some(PlayerInput::DumpState) => {
                            let snapshot = snapshots.borrow().clone();
                            show(&format!("{}\n", snapshot.snapshot_json()?))?;
                        }
                        _ => {}
                    }
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        // Session ended on its own; fall back to home.
                        self.current_scene = SceneType::Home;
                        return Ok(false);
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    if snapshot.show_hint {
                        if let Some(guess) = last_guess {
                            self.display.set_active_hint(snapshot.current_hint(guess));
                        }
                    } else {
                        self.display.set_active_hint(None);
                    }
                    show(&self.display.render_game(&snapshot))?;
                }
                notice = notices.recv() => {
                    if let Some(notice) = notice {
                        self.display.add_notice(&notice);
                        if let Some(message) = self.display.last_message() {
                            show(&format!(">> {}\n", message))?;
                        }
                    }
                }
            }
        }
    }
}

/// Prints a block of text and flushes so prompts appear immediately.
fn show(text: &str) -> MnemoResult<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
