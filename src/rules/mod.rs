//! Turn engine: legality, busts, banking and the win condition.
//!
//! `TurnEngine` is the single place that mutates `GameState`. It calls into
//! `scoring` for every roll and reports results as outcomes; illegal
//! commands come back as `FarkleError` with the state unchanged.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::TurnEngine;
pub use error::{FarkleError, SelectionRejection};
pub use outcome::{ActionOutcome, GameResult, RollOutcome, TurnOutcome};
