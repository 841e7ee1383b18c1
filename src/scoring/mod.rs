//! Farkle scoring.
//!
//! Pure functions from dice plus a position mask to points. The turn engine
//! calls `score` twice per roll path: over all six dice to detect a bust on
//! a fresh roll, and over the selection to price a reroll.

pub mod scorer;

pub use scorer::{
    breakdown, face_counts, is_bust, kind_multiplier, score, score_all,
    Combo, ScoreBreakdown, SINGLE_POINTS, TRIPLE_BASE,
};
