//! # Ring Tone and Call Simulation
//!
//! The call-simulator screen plays a tone while a call is active and stops
//! it otherwise. The tone itself is behind the [`RingtonePlayer`] trait so
//! the simulator's one invariant - the tone plays iff the call flag is set,
//! and always stops when the screen is left - can be tested without making
//! noise.

use crate::MnemoResult;
use log::{debug, info};
use std::io::Write;

/// A system tone that can be started and stopped.
pub trait RingtonePlayer {
    /// Begins playing the tone.
    fn start(&mut self) -> MnemoResult<()>;

    /// Stops the tone. Must be safe to call when not playing.
    fn stop(&mut self);
}

/// Terminal-bell ring tone: emits the BEL character when the tone starts.
///
/// The terminal has no sustained tone, so "playing" is a single bell plus a
/// logged state; stopping only clears the state.
#[derive(Debug, Default)]
pub struct TerminalBell {
    playing: bool,
}

impl TerminalBell {
    /// Creates a new terminal bell player.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RingtonePlayer for TerminalBell {
    fn start(&mut self) -> MnemoResult<()> {
        if !self.playing {
            let mut stdout = std::io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
            self.playing = true;
            debug!("ring tone started");
        }
        Ok(())
    }

    fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            debug!("ring tone stopped");
        }
    }
}

/// The call simulator: a boolean call flag tied to a ring tone.
///
/// Invariant: the tone is playing exactly while `is_calling()` holds, and
/// dropping the simulator (leaving the screen) always stops the tone.
pub struct CallSimulator {
    player: Box<dyn RingtonePlayer + Send>,
    calling: bool,
}

impl CallSimulator {
    /// Creates a simulator over the given tone player.
    pub fn new(player: Box<dyn RingtonePlayer + Send>) -> Self {
        Self {
            player,
            calling: false,
        }
    }

    /// Creates a simulator using the terminal bell.
    pub fn with_terminal_bell() -> Self {
        Self::new(Box::new(TerminalBell::new()))
    }

    /// Starts the simulated call and the ring tone.
    pub fn start_call(&mut self) -> MnemoResult<()> {
        if !self.calling {
            self.player.start()?;
            self.calling = true;
            info!("call started");
        }
        Ok(())
    }

    /// Stops the simulated call and the ring tone.
    pub fn stop_call(&mut self) {
        if self.calling {
            self.player.stop();
            self.calling = false;
            info!("call stopped");
        }
    }

    /// Whether a call is currently active.
    pub fn is_calling(&self) -> bool {
        self.calling
    }
}

impl Drop for CallSimulator {
    fn drop(&mut self) {
        // Leaving the screen must never leave the tone ringing.
        self.stop_call();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records start/stop calls instead of making noise.
    #[derive(Default)]
    struct RecordingPlayer {
        events: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingPlayer {
        fn with_log(events: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self { events }
        }
    }

    impl RingtonePlayer for RecordingPlayer {
        fn start(&mut self) -> MnemoResult<()> {
            self.events.lock().unwrap().push("start");
            Ok(())
        }

        fn stop(&mut self) {
            self.events.lock().unwrap().push("stop");
        }
    }

    #[test]
    fn test_tone_follows_call_flag() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut sim = CallSimulator::new(Box::new(RecordingPlayer::with_log(events.clone())));

        assert!(!sim.is_calling());
        sim.start_call().unwrap();
        assert!(sim.is_calling());
        sim.stop_call();
        assert!(!sim.is_calling());

        assert_eq!(*events.lock().unwrap(), vec!["start", "stop"]);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut sim = CallSimulator::new(Box::new(RecordingPlayer::with_log(events.clone())));

        sim.start_call().unwrap();
        sim.start_call().unwrap();
        sim.stop_call();
        sim.stop_call();

        assert_eq!(*events.lock().unwrap(), vec!["start", "stop"]);
    }

    #[test]
    fn test_drop_stops_active_call() {
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let mut sim = CallSimulator::new(Box::new(RecordingPlayer::with_log(events.clone())));
            sim.start_call().unwrap();
        }
        assert_eq!(*events.lock().unwrap(), vec!["start", "stop"]);
    }

    #[test]
    fn test_drop_without_call_is_silent() {
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let _sim = CallSimulator::new(Box::new(RecordingPlayer::with_log(events.clone())));
        }
        assert!(events.lock().unwrap().is_empty());
    }
}
