//! Channel-driven tests for the TUI orchestrator.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tictactoe::tui::{Command, GameEvent, GameMode, Orchestrator, Snapshot};
use tictactoe::{Outcome, Player, Square};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

type Channels = (
    mpsc::UnboundedSender<Command>,
    mpsc::UnboundedReceiver<GameEvent>,
    JoinHandle<anyhow::Result<()>>,
);

fn spawn_orchestrator(mode: GameMode, delay: Duration) -> Channels {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let rng = SmallRng::seed_from_u64(7);
    let mut orchestrator = Orchestrator::new(mode, delay, rng, command_rx, event_tx);
    let handle = tokio::spawn(async move { orchestrator.run().await });
    (command_tx, event_rx, handle)
}

/// Waits for the next published snapshot, skipping thinking notices.
async fn next_state(event_rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Snapshot {
    loop {
        match event_rx.recv().await.expect("orchestrator stopped") {
            GameEvent::State(snapshot) => return snapshot,
            GameEvent::Thinking => continue,
        }
    }
}

#[tokio::test]
async fn pvc_round_alternates_human_and_computer() {
    let (command_tx, mut event_rx, handle) =
        spawn_orchestrator(GameMode::Pvc, Duration::ZERO);

    let snapshot = next_state(&mut event_rx).await;
    assert!(snapshot.running);
    assert_eq!(snapshot.to_move, Player::X);

    // Human X takes a corner; the computer answers with the center.
    command_tx.send(Command::Place(0)).unwrap();
    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.to_move, Player::O);
    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.to_move, Player::X);
    assert_eq!(snapshot.board.get(4), Some(Square::Occupied(Player::O)));

    drop(command_tx);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn placements_during_the_computers_turn_are_ignored() {
    let (command_tx, mut event_rx, handle) =
        spawn_orchestrator(GameMode::Pvc, Duration::from_millis(200));

    next_state(&mut event_rx).await;
    command_tx.send(Command::Place(0)).unwrap();
    // Queued before the reply timer fires, so it lands mid-delay.
    command_tx.send(Command::Place(1)).unwrap();

    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.to_move, Player::O);
    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.board.get(1), Some(Square::Empty));
    assert_eq!(snapshot.board.get(4), Some(Square::Occupied(Player::O)));

    drop(command_tx);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn scores_survive_round_resets_but_not_score_resets() {
    let (command_tx, mut event_rx, handle) =
        spawn_orchestrator(GameMode::Pvp, Duration::ZERO);

    next_state(&mut event_rx).await;
    for index in [0, 3, 1, 4, 2] {
        command_tx.send(Command::Place(index)).unwrap();
        next_state(&mut event_rx).await;
    }

    command_tx.send(Command::ResetRound).unwrap();
    let snapshot = next_state(&mut event_rx).await;
    assert!(snapshot.running);
    assert!(snapshot.outcome.is_none());
    assert_eq!(snapshot.scores.wins(Player::X), 1);
    assert!(snapshot.board.squares().iter().all(|s| *s == Square::Empty));

    command_tx.send(Command::ResetScores).unwrap();
    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.scores.wins(Player::X), 0);

    drop(command_tx);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn winning_snapshot_reports_the_line() {
    let (command_tx, mut event_rx, handle) =
        spawn_orchestrator(GameMode::Pvp, Duration::ZERO);

    next_state(&mut event_rx).await;
    let mut last = None;
    for index in [0, 3, 1, 4, 2] {
        command_tx.send(Command::Place(index)).unwrap();
        last = Some(next_state(&mut event_rx).await);
    }

    let snapshot = last.expect("at least one snapshot");
    assert!(!snapshot.running);
    assert_eq!(
        snapshot.outcome,
        Some(Outcome::Won {
            winner: Player::X,
            line: [0, 1, 2],
        })
    );

    drop(command_tx);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn switching_modes_resets_the_round() {
    let (command_tx, mut event_rx, handle) =
        spawn_orchestrator(GameMode::Pvp, Duration::ZERO);

    next_state(&mut event_rx).await;
    command_tx.send(Command::Place(0)).unwrap();
    next_state(&mut event_rx).await;

    command_tx.send(Command::SetMode(GameMode::Pvc)).unwrap();
    let snapshot = next_state(&mut event_rx).await;
    assert_eq!(snapshot.mode, GameMode::Pvc);
    assert_eq!(snapshot.to_move, Player::X);
    assert!(snapshot.board.squares().iter().all(|s| *s == Square::Empty));

    drop(command_tx);
    handle.await.unwrap().unwrap();
}
