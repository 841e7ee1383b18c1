//! # farkle-engine
//!
//! Rules engine and turn state machine for the dice game Farkle.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All game state lives in one owned `GameState`.
//!    Only `TurnEngine` commands change it; callers read snapshots.
//!
//! 2. **Injectable Dice**: Every face comes from a `DiceSource`. Seed a
//!    `GameRng` for play, or script exact faces with `ScriptedDice`.
//!
//! 3. **No Partial Failure**: A command either applies fully or returns a
//!    `FarkleError` and leaves the state as it was.
//!
//! ## Modules
//!
//! - `core`: Dice, masks, players, configuration, actions, state, dice sources
//! - `scoring`: Pure point values for any subset of a roll
//! - `rules`: `TurnEngine`, outcomes and errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod scoring;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Die, Roll, DiceMask, DICE_COUNT,
    PlayerId, Player, Roster,
    DiceSource, GameRng, ScriptedDice,
    FarkleConfig, DEFAULT_WINNING_SCORE,
    Action, ActionRecord,
    TurnPhase, TurnState, GameState,
};

pub use crate::scoring::{score, score_all, breakdown, Combo, ScoreBreakdown};

pub use crate::rules::{
    TurnEngine, FarkleError, SelectionRejection,
    ActionOutcome, GameResult, RollOutcome, TurnOutcome,
};
