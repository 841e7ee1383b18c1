//! Core data model: dice, players, configuration, actions, state, dice sources.
//!
//! Nothing here enforces game rules; `rules::TurnEngine` is the only code
//! that moves a `GameState` from one position to the next.

pub mod dice;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use dice::{Die, Roll, DiceMask, DICE_COUNT};
pub use player::{PlayerId, Player, Roster};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use config::{FarkleConfig, DEFAULT_WINNING_SCORE, MIN_PLAYERS, MAX_PLAYERS};
pub use action::{Action, ActionRecord};
pub use state::{TurnPhase, TurnState, GameState};
