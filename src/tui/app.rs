//! Application state for the render loop.

use super::input;
use super::mode::GameMode;
use super::orchestrator::{GameEvent, Snapshot};
use crossterm::event::KeyCode;
use tracing::debug;

/// Render-side state: the latest session snapshot plus the cursor and the
/// status line. All game mutations happen in the orchestrator; this type
/// only mirrors what it publishes.
pub struct App {
    snapshot: Snapshot,
    cursor: usize,
    status: String,
}

impl App {
    /// Creates the application state for a fresh session.
    pub fn new(mode: GameMode) -> Self {
        Self {
            snapshot: Snapshot::initial(mode),
            cursor: 4,
            status: "Player X's turn. Press 1-9, or move the cursor and press Enter.".to_string(),
        }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The cursor cell (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles an event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::Thinking => {
                self.status = "Computer is thinking...".to_string();
            }
            GameEvent::State(snapshot) => {
                self.status = match snapshot.outcome {
                    Some(outcome) if !snapshot.running => {
                        format!("{outcome} Press 'r' for a new round or 'q' to quit.")
                    }
                    _ => format!("Player {}'s turn", snapshot.to_move),
                };
                self.snapshot = snapshot;
            }
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }
}
