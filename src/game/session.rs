//! Session state machine: legal-move sequencing and terminal detection.

use super::rules::{self, Outcome};
use super::types::{Board, Player, Scoreboard, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game session: one board, the active player, a running flag, and the
/// win tallies that persist across rounds.
///
/// The session is mutated only through [`Session::place_mark`] and the two
/// reset operations. Callers are expected to hold it behind a single
/// writer; the render side works from snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    to_move: Player,
    running: bool,
    scores: Scoreboard,
}

impl Session {
    /// Creates a fresh session: empty board, X to move, zeroed scores.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            running: true,
            scores: Scoreboard::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true while the round is still accepting moves.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the win tallies.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Places the active player's mark at `index` (0-8).
    ///
    /// Illegal requests - round already over, index out of range, cell
    /// already occupied - are tolerated as silent no-ops returning `None`,
    /// since the presentation layer is expected to prevent them. On a
    /// terminal move the round stops running and a win is tallied;
    /// otherwise the active player toggles. Returns the terminal outcome
    /// so the caller can announce it and decide whether to request an
    /// automated reply.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place_mark(&mut self, index: usize) -> Option<Outcome> {
        if !self.running || !self.board.is_empty(index) {
            debug!(index, "placement ignored");
            return None;
        }
        if self.board.set(index, Square::Occupied(self.to_move)).is_err() {
            return None;
        }

        let outcome = rules::evaluate(&self.board);
        match outcome {
            Some(outcome) => {
                self.running = false;
                if let Outcome::Won { winner, .. } = outcome {
                    self.scores.record_win(winner);
                }
                debug!(%outcome, "round finished");
            }
            None => {
                self.to_move = self.to_move.opponent();
            }
        }
        outcome
    }

    /// Clears the board for a new round. X starts; scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        debug!("round reset");
        self.board = Board::new();
        self.to_move = Player::X;
        self.running = true;
    }

    /// Zeroes both win tallies. Round state is untouched; callers that
    /// also want a fresh board call [`Session::reset_round`].
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
