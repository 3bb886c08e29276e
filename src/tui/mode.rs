//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    Pvp,
    /// Human X against the heuristic computer.
    Pvc,
}

impl GameMode {
    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Pvc => "Player vs Computer",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Pvp => GameMode::Pvc,
            GameMode::Pvc => GameMode::Pvp,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Pvp
    }
}
