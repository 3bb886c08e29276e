//! Heuristic move selection for the computer opponent.
//!
//! A fixed-priority policy, deliberately not a game-tree search: it wins
//! or blocks when a line is one move from completion, then falls back to
//! positional preferences. It is beatable in specific lines.

use super::rules::{self, Outcome};
use super::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Corner cells, scanned in this order by the corner rules.
const CORNERS: [usize; 4] = [0, 2, 6, 8];
/// Side (edge-center) cells.
const SIDES: [usize; 4] = [1, 3, 5, 7];
/// The center cell.
const CENTER: usize = 4;

/// The advisor was asked for a move on a full board.
///
/// This signals a caller-contract violation: a move should only be
/// requested while the round is running, which implies an empty cell
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no empty cell is left to move into")]
pub struct NoMoveAvailable;

/// Chooses a cell for `player` on the given board snapshot.
///
/// Priority order, first applicable rule wins:
///
/// 1. complete a line for `player`
/// 2. block a line the opponent is about to complete
/// 3. take the center
/// 4. take the corner diametrically opposite one held by the opponent
/// 5. a random free corner
/// 6. a random free side
/// 7. any random free cell
///
/// Ties within the first two rules resolve to the lowest index; the
/// random rules draw uniformly from the injected `rng`, so a seeded
/// generator makes play fully deterministic.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<usize, NoMoveAvailable> {
    let opponent = player.opponent();

    // Win if possible.
    if let Some(index) = completing_cell(board, player) {
        debug!(index, "taking the winning cell");
        return Ok(index);
    }

    // Block the opponent's win.
    if let Some(index) = completing_cell(board, opponent) {
        debug!(index, "blocking the opponent");
        return Ok(index);
    }

    // Take the center.
    if board.is_empty(CENTER) {
        return Ok(CENTER);
    }

    // Take the corner opposite one the opponent holds (0<->8, 2<->6).
    for corner in CORNERS {
        let opposite = 8 - corner;
        if board.get(corner) == Some(Square::Occupied(opponent)) && board.is_empty(opposite) {
            debug!(opposite, "taking the opposite corner");
            return Ok(opposite);
        }
    }

    // Any free corner, then any free side.
    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&i| board.is_empty(i))
        .collect();
    if let Some(&index) = free_corners.choose(rng) {
        return Ok(index);
    }
    let free_sides: Vec<usize> = SIDES
        .iter()
        .copied()
        .filter(|&i| board.is_empty(i))
        .collect();
    if let Some(&index) = free_sides.choose(rng) {
        return Ok(index);
    }

    // Whatever is left at all.
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(NoMoveAvailable)
}

/// Finds the lowest-index empty cell where placing `mark` completes a
/// line for `mark`.
fn completing_cell(board: &Board, mark: Player) -> Option<usize> {
    for index in 0..9 {
        if !board.is_empty(index) {
            continue;
        }
        let mut probe = board.clone();
        if probe.set(index, Square::Occupied(mark)).is_err() {
            continue;
        }
        if matches!(
            rules::evaluate(&probe),
            Some(Outcome::Won { winner, .. }) if winner == mark
        ) {
            return Some(index);
        }
    }
    None
}
