//! Player commands and their history records.
//!
//! Every command the view layer can issue is an `Action`. The engine records
//! each successfully applied action as an `ActionRecord` so a game can be
//! inspected or replayed against a scripted dice source.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A command issued to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Flip the selection flag of the die at this position.
    ToggleSelection(u8),
    /// Roll all dice (first roll) or the unselected, unlocked dice (reroll).
    Roll,
    /// Bank the round score and pass the turn.
    EndTurn,
    /// Zero all scores and start over with the first player.
    ResetGame,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::ToggleSelection(i) => write!(f, "toggle({})", i),
            Action::Roll => write!(f, "roll"),
            Action::EndTurn => write!(f, "end_turn"),
            Action::ResetGame => write!(f, "reset"),
        }
    }
}

/// A recorded action with the context it was taken in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position of this action within the game's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::ToggleSelection(3).to_string(), "toggle(3)");
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::EndTurn.to_string(), "end_turn");
        assert_eq!(Action::ResetGame.to_string(), "reset");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Roll, 3, 7);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.action, Action::Roll);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(0), Action::ToggleSelection(2), 1, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
