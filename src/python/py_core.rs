//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DiceMask, PlayerId, Roll, DICE_COUNT};
use crate::rules::FarkleError;
use crate::scoring;

impl From<FarkleError> for PyErr {
    fn from(err: FarkleError) -> Self {
        PyErr::new::<PyValueError, _>(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Score the selected dice of a roll.
///
/// # Arguments
/// - faces: six die faces, each 1-6
/// - selected: six flags; only flagged dice are scored
#[pyfunction]
pub fn score(faces: [u8; DICE_COUNT], selected: [bool; DICE_COUNT]) -> PyResult<u32> {
    let roll = Roll::from_faces(faces).ok_or_else(|| {
        PyErr::new::<PyValueError, _>(format!("die faces must be 1-6, got {:?}", faces))
    })?;
    Ok(scoring::score(&roll, DiceMask::from_bools(selected)))
}
