//! Game configuration.
//!
//! `FarkleConfig` fixes the roster and the winning threshold at game start.
//! Defaults match the classic two-player table: "Player 1" and "Player 2"
//! racing to 5000.

use serde::{Deserialize, Serialize};

use crate::rules::FarkleError;

/// Banked score that ends the game by default.
pub const DEFAULT_WINNING_SCORE: u32 = 5000;

/// Fewest seats a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can have (`PlayerId` is a `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarkleConfig {
    /// Display names in seat order.
    pub player_names: Vec<String>,

    /// First banked total at or above this wins.
    pub winning_score: u32,
}

impl Default for FarkleConfig {
    fn default() -> Self {
        Self {
            player_names: vec!["Player 1".to_string(), "Player 2".to_string()],
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

impl FarkleConfig {
    /// Two players, winning score 5000.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` players named "Player 1", "Player 2", ...
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_names = (1..=count).map(|i| format!("Player {}", i)).collect();
        self
    }

    /// Replace the roster with the given names, in seat order.
    #[must_use]
    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the winning threshold.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the roster size and winning threshold.
    pub fn validate(&self) -> Result<(), FarkleError> {
        let count = self.player_count();
        if count < MIN_PLAYERS {
            return Err(FarkleError::TooFewPlayers { count });
        }
        if count > MAX_PLAYERS {
            return Err(FarkleError::TooManyPlayers { count });
        }
        if self.winning_score == 0 {
            return Err(FarkleError::InvalidWinningScore);
        }
        Ok(())
    }
}
