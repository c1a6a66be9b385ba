//! Game session configuration.
//!
//! Configuration is plain serde data so it can come from a TOML file on
//! the native side or from a JavaScript object in the browser.

use crate::search::Scoring;
use chess_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The text was not valid TOML or did not match the expected shape.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// One human plays against the greedy computer player.
    #[serde(rename = "pvc")]
    PlayerVsComputer,
}

/// Settings for a game session. Every field has a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Defaults to two human players.
    #[serde(default)]
    pub mode: GameMode,
    /// Side the computer plays in [`GameMode::PlayerVsComputer`].
    /// Defaults to Black.
    #[serde(default = "default_computer_color")]
    pub computer_color: Color,
    /// Pause the page should take before showing the computer's reply,
    /// so it does not appear instantaneous. Defaults to 500 ms.
    #[serde(default = "default_computer_delay_ms")]
    pub computer_delay_ms: u32,
    /// Scoring policy for the computer's search.
    #[serde(default)]
    pub scoring: Scoring,
}

fn default_computer_color() -> Color {
    Color::Black
}

fn default_computer_delay_ms() -> u32 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::default(),
            computer_color: default_computer_color(),
            computer_delay_ms: default_computer_delay_ms(),
            scoring: Scoring::default(),
        }
    }
}

impl GameConfig {
    /// Defaults for a game against the computer.
    pub fn player_vs_computer() -> Self {
        GameConfig {
            mode: GameMode::PlayerVsComputer,
            ..Self::default()
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the side the computer plays, if any.
    pub fn computer_side(&self) -> Option<Color> {
        match self.mode {
            GameMode::PlayerVsComputer => Some(self.computer_color),
            GameMode::PlayerVsPlayer => None,
        }
    }
}
