//! What each engine command produced.
//!
//! Outcomes carry everything the view needs to announce the result: the dice
//! that were rolled (even after a bust resets the table), points gained or
//! forfeited, and who plays next or who won.

use serde::{Deserialize, Serialize};

use crate::core::{DiceMask, PlayerId, Roll};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winning seat.
    pub winner: PlayerId,
    /// Winner's display name.
    pub name: String,
    /// Winner's banked total.
    pub score: u32,
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Round score added to the player's total; play passes on.
    Banked {
        player: PlayerId,
        banked: u32,
        total: u32,
        next_player: PlayerId,
    },
    /// Roll scored nothing; round score forfeited, total untouched.
    Busted {
        player: PlayerId,
        forfeited: u32,
        next_player: PlayerId,
    },
    /// Bank reached the winning score.
    Won(GameResult),
}

impl TurnOutcome {
    /// Seat that acts next, if the game continues.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        match self {
            TurnOutcome::Banked { next_player, .. } | TurnOutcome::Busted { next_player, .. } => {
                Some(*next_player)
            }
            TurnOutcome::Won(_) => None,
        }
    }
}

/// Result of a roll or reroll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// Roll scored; the turn continues.
    Scored {
        roll: Roll,
        points: u32,
        round_score: u32,
    },
    /// Roll scored nothing. `roll` is the losing roll; the turn has already
    /// passed to the next player.
    Bust { roll: Roll, turn: TurnOutcome },
}

impl RollOutcome {
    #[must_use]
    pub fn is_bust(&self) -> bool {
        matches!(self, RollOutcome::Bust { .. })
    }

    /// The dice as rolled.
    #[must_use]
    pub fn roll(&self) -> &Roll {
        match self {
            RollOutcome::Scored { roll, .. } | RollOutcome::Bust { roll, .. } => roll,
        }
    }
}

/// Result of `TurnEngine::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// New selection after a toggle.
    Toggled(DiceMask),
    Rolled(RollOutcome),
    TurnEnded(TurnOutcome),
    Reset,
}
