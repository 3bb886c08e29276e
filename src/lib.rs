//! Tic-tac-toe: a 3x3 game-state machine, a heuristic computer opponent,
//! and a terminal front end.
//!
//! # Architecture
//!
//! - **Core** ([`Session`], [`evaluate`], [`choose_move`]): synchronous
//!   game logic with no I/O. The session enforces legal-move sequencing
//!   and detects terminal outcomes; the advisor is a pure function of a
//!   board snapshot with an injected random source.
//! - **TUI** ([`tui`]): ratatui front end. An orchestrator task owns the
//!   session and is its single writer; the render loop works from the
//!   snapshots it publishes.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Player, Session};
//!
//! let mut session = Session::new();
//! session.place_mark(0); // X
//! session.place_mark(3); // O
//! session.place_mark(1); // X
//! session.place_mark(4); // O
//! let outcome = session.place_mark(2); // X completes the top row
//! assert_eq!(outcome.and_then(|o| o.winner()), Some(Player::X));
//! assert_eq!(session.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod tui;

pub use game::{
    Board, NoMoveAvailable, Outcome, Player, Scoreboard, Session, Square, WIN_LINES, choose_move,
    evaluate,
};
