//! Win and draw detection for tic-tac-toe.

use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning index triples, in the order they are checked.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line, as board indices.
        line: [usize; 3],
    },
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round ended in a tie.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { winner, .. } => write!(f, "Player {winner} wins!"),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

/// Evaluates a board for a terminal result.
///
/// Checks the win lines in their fixed order and returns the first line
/// whose three cells share a mark, `Outcome::Draw` when the board is full
/// with no such line, or `None` while play continues.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.squares()[a];
        if sq != Square::Empty && sq == board.squares()[b] && sq == board.squares()[c] {
            if let Square::Occupied(winner) = sq {
                return Some(Outcome::Won { winner, line });
            }
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}
