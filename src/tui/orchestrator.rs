//! Game orchestration: the single writer of the session state.
//!
//! The orchestrator task owns the [`Session`] outright. The UI loop sends
//! it [`Command`]s and renders the [`Snapshot`]s it publishes back; no
//! other code touches the session. The computer's reply is scheduled here
//! as a caller-side timer - the core stays synchronous.

use super::mode::GameMode;
use crate::game::{Board, Outcome, Player, Scoreboard, Session, choose_move};
use anyhow::Result;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, instrument};

/// The mark the computer plays.
const COMPUTER: Player = Player::O;

/// Requests sent from the UI loop to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's mark at a cell (0-8).
    Place(usize),
    /// Start a new round, keeping the scores.
    ResetRound,
    /// Zero the scores and start a new round.
    ResetScores,
    /// Switch between PvP and PvC; switching starts a new round.
    SetMode(GameMode),
}

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The session changed; a full snapshot for rendering.
    State(Snapshot),
    /// The computer's reply has been scheduled.
    Thinking,
}

/// Render-ready copy of the session state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// The board cells.
    pub board: Board,
    /// Player to move (meaningful while running).
    pub to_move: Player,
    /// Whether the round is still accepting moves.
    pub running: bool,
    /// Win tallies.
    pub scores: Scoreboard,
    /// Active mode.
    pub mode: GameMode,
    /// Terminal outcome of the last finished round, if any.
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Snapshot of a session that has not been touched yet, for the UI to
    /// render before the orchestrator's first publication arrives.
    pub fn initial(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            running: true,
            scores: Scoreboard::new(),
            mode,
            outcome: None,
        }
    }
}

/// Orchestrates a session between keyboard input and the heuristic
/// computer opponent.
pub struct Orchestrator {
    session: Session,
    mode: GameMode,
    delay: Duration,
    rng: SmallRng,
    last_outcome: Option<Outcome>,
    /// When the computer's pending reply fires, if one is scheduled.
    deadline: Option<Instant>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        mode: GameMode,
        delay: Duration,
        rng: SmallRng,
        command_rx: mpsc::UnboundedReceiver<Command>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: Session::new(),
            mode,
            delay,
            rng,
            last_outcome: None,
            deadline: None,
            command_rx,
            event_tx,
        }
    }

    /// Runs until the command channel closes.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn run(&mut self) -> Result<()> {
        info!("starting game orchestration");
        self.publish()?;

        loop {
            let command = match self.deadline {
                Some(deadline) => match timeout_at(deadline, self.command_rx.recv()).await {
                    Ok(command) => command,
                    Err(_elapsed) => {
                        self.deadline = None;
                        self.computer_move()?;
                        continue;
                    }
                },
                None => self.command_rx.recv().await,
            };

            let Some(command) = command else {
                info!("command channel closed, stopping");
                return Ok(());
            };
            self.apply(command)?;
        }
    }

    /// Applies one UI command to the session.
    #[instrument(skip(self))]
    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Place(index) => {
                if self.computer_to_move() {
                    debug!(index, "ignoring placement during the computer's turn");
                    return Ok(());
                }
                self.place(index)?;
            }
            Command::ResetRound => {
                self.session.reset_round();
                self.last_outcome = None;
                self.publish()?;
            }
            Command::ResetScores => {
                self.session.reset_scores();
                self.session.reset_round();
                self.last_outcome = None;
                self.publish()?;
            }
            Command::SetMode(mode) => {
                if mode != self.mode {
                    info!(%mode, "mode changed");
                    self.mode = mode;
                    self.session.reset_round();
                    self.last_outcome = None;
                    self.publish()?;
                }
            }
        }
        self.schedule_computer()
    }

    /// Feeds a placement into the session and publishes the result.
    fn place(&mut self, index: usize) -> Result<()> {
        if let Some(outcome) = self.session.place_mark(index) {
            info!(%outcome, "round finished");
            self.last_outcome = Some(outcome);
        }
        self.publish()
    }

    /// Plays the computer's turn: ask the advisor, place the answer.
    #[instrument(skip(self))]
    fn computer_move(&mut self) -> Result<()> {
        let index = choose_move(self.session.board(), COMPUTER, &mut self.rng)?;
        debug!(index, "computer chose a cell");
        self.place(index)?;
        self.schedule_computer()
    }

    /// Arms the reply timer when the computer is due to move; disarms it
    /// otherwise. An already-armed timer is left running so that ignored
    /// keypresses cannot postpone the reply.
    fn schedule_computer(&mut self) -> Result<()> {
        if !self.computer_to_move() {
            self.deadline = None;
        } else if self.deadline.is_none() {
            self.event_tx.send(GameEvent::Thinking)?;
            self.deadline = Some(Instant::now() + self.delay);
        }
        Ok(())
    }

    fn computer_to_move(&self) -> bool {
        self.mode == GameMode::Pvc
            && self.session.is_running()
            && self.session.to_move() == COMPUTER
    }

    /// Sends the current session state to the UI.
    fn publish(&self) -> Result<()> {
        let snapshot = Snapshot {
            board: self.session.board().clone(),
            to_move: self.session.to_move(),
            running: self.session.is_running(),
            scores: *self.session.scores(),
            mode: self.mode,
            outcome: self.last_outcome,
        };
        debug!(board = %snapshot.board.display(), "state published");
        self.event_tx.send(GameEvent::State(snapshot))?;
        Ok(())
    }
}
