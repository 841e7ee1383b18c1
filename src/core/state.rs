//! Game state: the turn in progress and the table around it.
//!
//! ## TurnState
//!
//! Everything scoped to one player's turn: the dice, which positions are
//! selected and locked, and the score accumulated this round. A fresh
//! `TurnState` is built each time a turn begins and replaced when it ends.
//!
//! ## GameState
//!
//! The roster, the current `TurnState`, the winning threshold and the
//! action history. Owned by the engine; callers read it through `&` or an
//! owned snapshot and never mutate the engine's copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::FarkleConfig;
use super::dice::{DiceMask, Roll};
use super::player::{Player, PlayerId, Roster};

/// Where the active turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Turn has begun, nothing rolled yet.
    AwaitingFirstRoll,
    /// Dice are showing; the player selects, rerolls or banks.
    AwaitingSelection,
    /// Turn is over and input is gated until the next turn is built.
    TurnEnded,
    /// A bank crossed the winning score. Only a reset leaves this phase.
    GameOver { winner: PlayerId },
}

/// Per-turn state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current dice faces.
    pub roll: Roll,

    /// Positions selected for scoring on the next reroll.
    pub selection: DiceMask,

    /// Positions committed for the rest of the round. Bits are never cleared
    /// while the turn lasts.
    pub lock: DiceMask,

    /// Points accumulated this turn, not yet banked.
    pub round_score: u32,

    /// Seat whose turn this is.
    pub active_player: PlayerId,

    /// Set when the turn ends; gates all selection input.
    pub turn_ended: bool,

    pub phase: TurnPhase,

    /// Rolls made this turn, including the first.
    pub rolls: u32,
}

impl TurnState {
    /// Fresh turn for `player`: neutral dice, nothing selected or locked.
    #[must_use]
    pub fn begin(player: PlayerId) -> Self {
        Self {
            roll: Roll::neutral(),
            selection: DiceMask::NONE,
            lock: DiceMask::NONE,
            round_score: 0,
            active_player: player,
            turn_ended: false,
            phase: TurnPhase::AwaitingFirstRoll,
            rolls: 0,
        }
    }

    /// Positions the player may still toggle.
    #[must_use]
    pub fn selectable(&self) -> DiceMask {
        match self.phase {
            TurnPhase::AwaitingSelection if !self.turn_ended => self.lock.complement(),
            _ => DiceMask::NONE,
        }
    }

    /// Positions a reroll would regenerate right now.
    #[must_use]
    pub fn rerollable(&self) -> DiceMask {
        self.selection.union(self.lock).complement()
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    players: Roster,
    turn: TurnState,
    winning_score: u32,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Next history sequence number.
    action_sequence: u32,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the opening state for a validated configuration.
    #[must_use]
    pub fn new(config: &FarkleConfig) -> Self {
        Self {
            players: Roster::from_names(&config.player_names),
            turn: TurnState::begin(PlayerId::new(0)),
            winning_score: config.winning_score,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Actions applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The winning seat, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.turn.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Should the view ignore dice clicks right now?
    #[must_use]
    pub fn input_disabled(&self) -> bool {
        self.turn.turn_ended || self.is_game_over()
    }

    // === Engine-side mutation ===

    pub(crate) fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    pub(crate) fn players_mut(&mut self) -> &mut Roster {
        &mut self.players
    }

    /// Replace the turn with a fresh one for `player`, bumping the turn counter.
    pub(crate) fn begin_turn(&mut self, player: PlayerId) {
        self.turn = TurnState::begin(player);
        self.turn_number += 1;
    }

    /// Back to the opening position with the same roster and threshold.
    pub(crate) fn reset(&mut self) {
        self.players.reset_scores();
        self.turn = TurnState::begin(PlayerId::new(0));
        self.turn_number = 1;
        self.action_sequence = 0;
        self.history = Vector::new();
    }

    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_state_begin() {
        let turn = TurnState::begin(PlayerId::new(2));

        assert_eq!(turn.roll, Roll::neutral());
        assert!(turn.selection.is_empty());
        assert!(turn.lock.is_empty());
        assert_eq!(turn.round_score, 0);
        assert_eq!(turn.active_player, PlayerId::new(2));
        assert!(!turn.turn_ended);
        assert_eq!(turn.phase, TurnPhase::AwaitingFirstRoll);
        assert_eq!(turn.rolls, 0);
    }

    #[test]
    fn test_selectable_excludes_locked() {
        let mut turn = TurnState::begin(PlayerId::new(0));
        assert!(turn.selectable().is_empty());

        turn.phase = TurnPhase::AwaitingSelection;
        turn.lock = DiceMask::from_indices(&[0, 1]);
        assert_eq!(turn.selectable(), DiceMask::from_indices(&[2, 3, 4, 5]));

        turn.turn_ended = true;
        assert!(turn.selectable().is_empty());
    }

    #[test]
    fn test_rerollable() {
        let mut turn = TurnState::begin(PlayerId::new(0));
        turn.lock = DiceMask::from_indices(&[0]);
        turn.selection = DiceMask::from_indices(&[1, 2]);

        assert_eq!(turn.rerollable(), DiceMask::from_indices(&[3, 4, 5]));
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(&FarkleConfig::new());

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.active_player(), PlayerId::new(0));
        assert_eq!(state.winning_score(), 5000);
        assert_eq!(state.turn_number(), 1);
        assert!(state.history().is_empty());
        assert!(!state.is_game_over());
        assert!(!state.input_disabled());
    }

    #[test]
    fn test_record_sequences() {
        let mut state = GameState::new(&FarkleConfig::new());

        state.record(PlayerId::new(0), Action::Roll);
        state.record(PlayerId::new(0), Action::ToggleSelection(1));

        let seqs: Vec<_> = state.history().iter().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(state.history()[1].action, Action::ToggleSelection(1));
    }

    #[test]
    fn test_begin_turn_and_reset() {
        let mut state = GameState::new(&FarkleConfig::new());
        state.players_mut()[PlayerId::new(0)].total_score = 700;
        state.turn_mut().round_score = 300;
        state.record(PlayerId::new(0), Action::EndTurn);

        state.begin_turn(PlayerId::new(1));
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.active_player(), PlayerId::new(1));
        assert_eq!(state.turn().round_score, 0);

        state.reset();
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.active_player(), PlayerId::new(0));
        assert_eq!(state.players().scores(), vec![0, 0]);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_winner_from_phase() {
        let mut state = GameState::new(&FarkleConfig::new());
        state.turn_mut().phase = TurnPhase::GameOver { winner: PlayerId::new(1) };

        assert_eq!(state.winner(), Some(PlayerId::new(1)));
        assert!(state.input_disabled());
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = GameState::new(&FarkleConfig::new());
        state.record(PlayerId::new(0), Action::Roll);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
