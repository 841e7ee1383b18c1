//! Python bindings for the Farkle engine.
//!
//! # Quick Start
//!
//! ```python
//! import farkle_engine as fk
//!
//! game = fk.FarkleGame(players=["Ann", "Bo"], seed=7)
//! if game.roll():
//!     game.toggle(0)
//!     game.roll()
//! winner = game.end_turn()
//!
//! fk.score([1, 1, 1, 2, 3, 4], [True] * 6)  # 1000
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// farkle_engine: Farkle scoring and turn engine.
#[pymodule]
fn farkle_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyFarkleGame>()?;
    m.add_function(wrap_pyfunction!(score, m)?)?;

    Ok(())
}
