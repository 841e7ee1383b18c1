//! Point values for sets of dice.
//!
//! Only positions in the mask count. For each face:
//! - Three or more of a kind score the face's triple base times a multiplier
//!   (3 → ×1, 4 → ×2, 5 → ×4, 6 → ×8), consuming three dice.
//! - Whatever 1s and 5s remain score 100 and 50 each, including leftovers
//!   after a four-, five- or six-of-a-kind.
//! - Leftover 2s, 3s, 4s and 6s score nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceMask, Roll};

/// Triple value by face (index 0 unused).
pub const TRIPLE_BASE: [u32; 7] = [0, 1000, 200, 300, 400, 500, 600];

/// Single-die value by face (index 0 unused).
pub const SINGLE_POINTS: [u32; 7] = [0, 100, 0, 0, 0, 50, 0];

/// Multiplier applied to the triple base for `count` of a kind.
#[must_use]
pub const fn kind_multiplier(count: u8) -> u32 {
    match count {
        3 => 1,
        4 => 2,
        5 => 4,
        6 => 8,
        _ => 0,
    }
}

/// One scoring combination within a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combo {
    /// Three or more of a kind. `count` is the total number of that face,
    /// which sets the multiplier; only three dice are consumed.
    Set { face: u8, count: u8, points: u32 },
    /// Unmatched 1s or 5s.
    Singles { face: u8, count: u8, points: u32 },
}

impl Combo {
    #[must_use]
    pub const fn points(&self) -> u32 {
        match *self {
            Combo::Set { points, .. } | Combo::Singles { points, .. } => points,
        }
    }
}

/// Scoring combinations found in a selection, in face order with sets first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    // Six dice give at most two sets, or one set plus singles of both 1 and 5.
    combos: SmallVec<[Combo; 4]>,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// Sum of all combination points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.combos.iter().map(Combo::points).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

/// Count of each face among masked positions (index 0 unused).
#[must_use]
pub fn face_counts(roll: &Roll, mask: DiceMask) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for index in mask.iter() {
        counts[roll[index].face() as usize] += 1;
    }
    counts
}

/// Every scoring combination among the masked positions.
#[must_use]
pub fn breakdown(roll: &Roll, mask: DiceMask) -> ScoreBreakdown {
    let mut counts = face_counts(roll, mask);
    let mut combos = SmallVec::new();

    for face in 1..=6u8 {
        let count = counts[face as usize];
        if count >= 3 {
            combos.push(Combo::Set {
                face,
                count,
                points: TRIPLE_BASE[face as usize] * kind_multiplier(count),
            });
            counts[face as usize] -= 3;
        }
    }

    for face in [1u8, 5] {
        let count = counts[face as usize];
        if count > 0 {
            combos.push(Combo::Singles {
                face,
                count,
                points: SINGLE_POINTS[face as usize] * u32::from(count),
            });
        }
    }

    ScoreBreakdown { combos }
}

/// Points scored by the masked positions of `roll`.
///
/// ```
/// use farkle_engine::core::{DiceMask, Roll};
/// use farkle_engine::scoring::score;
///
/// let roll = Roll::from_faces([1, 1, 1, 2, 3, 4]).unwrap();
/// assert_eq!(score(&roll, DiceMask::ALL), 1000);
/// assert_eq!(score(&roll, DiceMask::from_indices(&[0])), 100);
/// assert_eq!(score(&roll, DiceMask::NONE), 0);
/// ```
#[must_use]
pub fn score(roll: &Roll, mask: DiceMask) -> u32 {
    breakdown(roll, mask).total()
}

/// Points scored by all six dice.
#[must_use]
pub fn score_all(roll: &Roll) -> u32 {
    score(roll, DiceMask::ALL)
}

/// Do the masked positions score nothing?
#[must_use]
pub fn is_bust(roll: &Roll, mask: DiceMask) -> bool {
    score(roll, mask) == 0
}
