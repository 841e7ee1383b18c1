//! Errors surfaced by the turn engine.
//!
//! Every error leaves the game state exactly as it was before the command.
//! A bust is not an error: it is reported through `RollOutcome::Bust`.

use std::fmt;

use thiserror::Error;

/// Why a selection toggle was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionRejection {
    /// Index is not a die position.
    OutOfRange,
    /// Die was committed earlier this round.
    Locked,
    /// Nothing has been rolled yet this turn.
    NotRolled,
    /// Turn is over; input is gated.
    TurnEnded,
    /// Game has a winner.
    GameOver,
}

impl fmt::Display for SelectionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionRejection::OutOfRange => "no such die",
            SelectionRejection::Locked => "die is locked for this round",
            SelectionRejection::NotRolled => "roll before selecting dice",
            SelectionRejection::TurnEnded => "turn has ended",
            SelectionRejection::GameOver => "game is over",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FarkleError {
    #[error("cannot toggle die {index}: {reason}")]
    IllegalSelection {
        index: usize,
        reason: SelectionRejection,
    },

    #[error("must select at least one die before rerolling")]
    IllegalReroll,

    #[error("game is over: {winner} has won")]
    GameOver { winner: String },

    #[error("need at least 2 players, got {count}")]
    TooFewPlayers { count: usize },

    #[error("at most 255 players supported, got {count}")]
    TooManyPlayers { count: usize },

    #[error("winning score must be positive")]
    InvalidWinningScore,
}
