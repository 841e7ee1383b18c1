//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{FarkleConfig, PlayerId, DICE_COUNT};
use crate::rules::{RollOutcome, TurnEngine, TurnOutcome};

use super::py_core::PyPlayerId;

/// Python wrapper for a seeded Farkle game.
///
/// Commands raise `ValueError` when illegal; a bust is not an error and is
/// reported by `roll()` returning False.
#[pyclass(name = "FarkleGame")]
pub struct PyFarkleGame {
    engine: TurnEngine,
}

#[pymethods]
impl PyFarkleGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - players: display names in seat order (at least 2)
    /// - winning_score: first banked total at or above this wins
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (
        players = vec!["Player 1".to_string(), "Player 2".to_string()],
        winning_score = 5000,
        seed = 42
    ))]
    fn new(players: Vec<String>, winning_score: u32, seed: u64) -> PyResult<Self> {
        let config = FarkleConfig::new()
            .with_players(players)
            .with_winning_score(winning_score);
        let engine = TurnEngine::seeded(config, seed)?;
        Ok(Self { engine })
    }

    /// Roll for the active player.
    ///
    /// Returns True if the roll scored, False if it busted.
    fn roll(&mut self) -> PyResult<bool> {
        let outcome = self.engine.roll_dice()?;
        Ok(matches!(outcome, RollOutcome::Scored { .. }))
    }

    /// Toggle selection of the die at `index` (0-5).
    fn toggle(&mut self, index: usize) -> PyResult<()> {
        self.engine.toggle_selection(index)?;
        Ok(())
    }

    /// Bank the round score and pass the turn.
    ///
    /// Returns the winner's name if this bank won the game.
    fn end_turn(&mut self) -> PyResult<Option<String>> {
        match self.engine.end_turn()? {
            TurnOutcome::Won(result) => Ok(Some(result.name)),
            _ => Ok(None),
        }
    }

    /// Zero all scores and start over.
    fn reset(&mut self) {
        self.engine.reset_game();
    }

    /// Current dice faces.
    #[getter]
    fn dice(&self) -> [u8; DICE_COUNT] {
        self.engine.state().turn().roll.faces()
    }

    #[getter]
    fn selected(&self) -> [bool; DICE_COUNT] {
        self.engine.state().turn().selection.to_bools()
    }

    #[getter]
    fn locked(&self) -> [bool; DICE_COUNT] {
        self.engine.state().turn().lock.to_bools()
    }

    #[getter]
    fn round_score(&self) -> u32 {
        self.engine.state().turn().round_score
    }

    /// Points the current selection would score.
    #[getter]
    fn selected_score(&self) -> u32 {
        self.engine.selected_score()
    }

    /// Banked totals in seat order.
    #[getter]
    fn scores(&self) -> Vec<u32> {
        self.engine.state().players().scores()
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.engine.state().active_player())
    }

    /// Winner's name once the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.engine.result().map(|r| r.name)
    }

    /// Display name of a seat.
    fn player_name(&self, player: &PyPlayerId) -> Option<String> {
        self.engine.state().players().get(player.0).map(|p| p.name.clone())
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        let status = match state.winner() {
            Some(PlayerId(w)) => format!("won by P{}", w),
            None => "ongoing".to_string(),
        };
        format!(
            "FarkleGame(turn={}, active=P{}, round={}, status={})",
            state.turn_number(),
            state.active_player().0,
            state.turn().round_score,
            status
        )
    }
}
