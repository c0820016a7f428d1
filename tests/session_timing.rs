//! Timing tests for the session actor, run against a paused clock so the
//! prepare delay, reveal window, and hint auto-clear are checked exactly
//! without real waiting.

use mnemo::{config, Difficulty, GameSession, GameState, GameStatus, SessionCommand};
use tokio::sync::watch;
use tokio::time::{Duration, Instant};

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
async fn test_prepare_delay_is_one_second() {
    let start = Instant::now();
    let mut handle = GameSession::spawn(Difficulty::Medium, 101);

    wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;
    let elapsed = Instant::now() - start;
    assert!(elapsed >= config::PREPARE_DELAY);
    assert!(elapsed < config::PREPARE_DELAY + Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_reveal_window_matches_difficulty() {
    for difficulty in Difficulty::all() {
        let mut handle = GameSession::spawn(difficulty, 103);
        wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;

        let shown_at = Instant::now();
        wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;
        let window = Instant::now() - shown_at;

        let expected = Duration::from_secs(difficulty.reveal_secs());
        assert!(window >= expected, "{} hid early", difficulty);
        assert!(
            window < expected + Duration::from_millis(100),
            "{} hid late",
            difficulty
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_hint_clears_after_three_seconds() {
    let mut handle = GameSession::spawn(Difficulty::Medium, 107);
    let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

    let wrong = if snapshot.target_number == 0 { 1 } else { 0 };
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

    let opened_at = Instant::now();
    loop {
        handle.snapshots.changed().await.unwrap();
        if !handle.snapshots.borrow_and_update().show_hint {
            break;
        }
    }
    let window = Instant::now() - opened_at;
    assert!(window >= config::HINT_DISPLAY);
    assert!(window < config::HINT_DISPLAY + Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_hint_window_reopens_on_second_wrong_guess() {
    let mut handle = GameSession::spawn(Difficulty::Medium, 109);
    let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;
    let target = snapshot.target_number;

    // Two distinct wrong values regardless of where the target landed.
    let (first, second) = if target <= 1 { (2, 3) } else { (0, 1) };

    handle
        .commands
        .send(SessionCommand::SubmitGuess(first.to_string()))
        .unwrap();
    loop {
        handle.snapshots.changed().await.unwrap();
        if handle.snapshots.borrow_and_update().show_hint {
            break;
        }
    }

    // Before the first window closes, a second wrong guess re-arms it.
    tokio::time::sleep(Duration::from_secs(1)).await;
    handle
        .commands
        .send(SessionCommand::SubmitGuess(second.to_string()))
        .unwrap();

    let rearmed_at = Instant::now();
    loop {
        handle.snapshots.changed().await.unwrap();
        if !handle.snapshots.borrow_and_update().show_hint {
            break;
        }
    }
    assert!(Instant::now() - rearmed_at >= config::HINT_DISPLAY);
}

#[tokio::test(start_paused = true)]
async fn test_no_timers_fire_after_win() {
    let mut handle = GameSession::spawn(Difficulty::Easy, 113);
    let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

    handle
        .commands
        .send(SessionCommand::SubmitGuess(snapshot.target_number.to_string()))
        .unwrap();
    wait_for_status(&mut handle.snapshots, GameStatus::Won).await;

    // Give any stray deadline plenty of paused time to fire.
    tokio::time::sleep(Duration::from_secs(30)).await;
    let settled = handle.snapshots.borrow_and_update().clone();
    assert_eq!(settled.status, GameStatus::Won);

    // The session is still responsive afterwards.
    handle.commands.send(SessionCommand::PlayAgain).unwrap();
    wait_for_status(&mut handle.snapshots, GameStatus::Preparing).await;
}

#[tokio::test(start_paused = true)]
async fn test_play_again_rearms_prepare_delay() {
    let mut handle = GameSession::spawn(Difficulty::Extreme, 127);
    let snapshot = wait_for_status(&mut handle.snapshots, GameStatus::Playing).await;

    handle
        .commands
        .send(SessionCommand::SubmitGuess(snapshot.target_number.to_string()))
        .unwrap();
    wait_for_status(&mut handle.snapshots, GameStatus::Won).await;

    handle.commands.send(SessionCommand::PlayAgain).unwrap();
    wait_for_status(&mut handle.snapshots, GameStatus::Preparing).await;

    let restarted_at = Instant::now();
    wait_for_status(&mut handle.snapshots, GameStatus::Showing).await;
    assert!(Instant::now() - restarted_at >= config::PREPARE_DELAY);
}
