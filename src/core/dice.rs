//! Dice, rolls and per-position masks.
//!
//! ## Die
//!
//! A single face value in `1..=6`. Construction is checked so a `Die`
//! can never hold an out-of-range face.
//!
//! ## Roll
//!
//! Six dice in a fixed order. Position identity matters: selection and
//! locking are tracked per position, not per face value.
//!
//! ## DiceMask
//!
//! A 6-bit set of die positions, used both for the player's current
//! selection and for dice locked for the rest of the round.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of dice in play.
pub const DICE_COUNT: usize = 6;

/// A single die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Lowest face.
    pub const MIN_FACE: u8 = 1;
    /// Highest face.
    pub const MAX_FACE: u8 = 6;
    /// Face shown by every die when a turn begins.
    pub const NEUTRAL: Die = Die(1);

    /// Create a die, returning `None` if `face` is outside `1..=6`.
    #[must_use]
    pub const fn new(face: u8) -> Option<Self> {
        if face >= Self::MIN_FACE && face <= Self::MAX_FACE {
            Some(Self(face))
        } else {
            None
        }
    }

    /// The face value.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Die::new(face).ok_or_else(|| format!("die face {} out of range 1..=6", face))
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Six dice indexed by position `0..6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll([Die; DICE_COUNT]);

impl Roll {
    /// All dice showing the neutral face.
    #[must_use]
    pub const fn neutral() -> Self {
        Self([Die::NEUTRAL; DICE_COUNT])
    }

    /// Wrap six dice.
    #[must_use]
    pub const fn new(dice: [Die; DICE_COUNT]) -> Self {
        Self(dice)
    }

    /// Build a roll from raw faces. Returns `None` if any face is out of range.
    ///
    /// ```
    /// use farkle_engine::core::Roll;
    ///
    /// let roll = Roll::from_faces([1, 1, 1, 2, 3, 4]).unwrap();
    /// assert_eq!(roll[0].face(), 1);
    /// assert!(Roll::from_faces([0, 1, 2, 3, 4, 5]).is_none());
    /// ```
    #[must_use]
    pub fn from_faces(faces: [u8; DICE_COUNT]) -> Option<Self> {
        let mut dice = [Die::NEUTRAL; DICE_COUNT];
        for (slot, face) in dice.iter_mut().zip(faces) {
            *slot = Die::new(face)?;
        }
        Some(Self(dice))
    }

    /// Raw face values in position order.
    #[must_use]
    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.0.map(Die::face)
    }

    /// Replace the die at `index`.
    pub fn set(&mut self, index: usize, die: Die) {
        self.0[index] = die;
    }

    /// Iterate over the dice in position order.
    pub fn iter(&self) -> impl Iterator<Item = Die> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Roll {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Index<usize> for Roll {
    type Output = Die;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces = self.faces();
        write!(
            f,
            "[{} {} {} {} {} {}]",
            faces[0], faces[1], faces[2], faces[3], faces[4], faces[5]
        )
    }
}

/// A set of die positions, stored as the low six bits of a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceMask(u8);

impl DiceMask {
    /// No positions.
    pub const NONE: DiceMask = DiceMask(0);
    /// All six positions.
    pub const ALL: DiceMask = DiceMask((1 << DICE_COUNT) - 1);

    /// Build a mask from one flag per position.
    #[must_use]
    pub fn from_bools(flags: [bool; DICE_COUNT]) -> Self {
        let mut mask = Self::NONE;
        for (index, set) in flags.into_iter().enumerate() {
            if set {
                mask.insert(index);
            }
        }
        mask
    }

    /// Build a mask from a list of positions. Positions `>= 6` are ignored.
    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        indices
            .iter()
            .filter(|&&i| i < DICE_COUNT)
            .fold(Self::NONE, |mask, &i| mask.with(i))
    }

    /// Raw bit pattern (bit `i` is position `i`).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Is position `index` in the set?
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < DICE_COUNT && self.0 & (1 << index) != 0
    }

    /// Copy of this mask with `index` added.
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    /// Add position `index`.
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < DICE_COUNT);
        self.0 |= 1 << index;
    }

    /// Flip position `index`.
    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < DICE_COUNT);
        self.0 ^= 1 << index;
    }

    /// Positions in either mask.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Positions in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Positions in both masks.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// All positions not in this mask.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::ALL.difference(self)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of positions in the set.
    #[must_use]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..DICE_COUNT).filter(move |&i| self.contains(i))
    }

    /// One flag per position.
    #[must_use]
    pub fn to_bools(self) -> [bool; DICE_COUNT] {
        std::array::from_fn(|i| self.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_range() {
        assert!(Die::new(0).is_none());
        assert!(Die::new(7).is_none());
        for face in 1..=6 {
            assert_eq!(Die::new(face).map(Die::face), Some(face));
        }
    }

    #[test]
    fn test_die_serde_rejects_bad_face() {
        let die: Die = serde_json::from_str("4").unwrap();
        assert_eq!(die.face(), 4);
        assert!(serde_json::from_str::<Die>("9").is_err());
    }

    #[test]
    fn test_roll_from_faces() {
        let roll = Roll::from_faces([6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(roll.faces(), [6, 5, 4, 3, 2, 1]);
        assert_eq!(roll[1].face(), 5);
        assert_eq!(format!("{}", roll), "[6 5 4 3 2 1]");

        assert!(Roll::from_faces([1, 2, 3, 4, 5, 7]).is_none());
    }

    #[test]
    fn test_roll_neutral() {
        assert_eq!(Roll::neutral().faces(), [1; DICE_COUNT]);
        assert_eq!(Roll::default(), Roll::neutral());
    }

    #[test]
    fn test_roll_set() {
        let mut roll = Roll::neutral();
        roll.set(3, Die::new(6).unwrap());
        assert_eq!(roll.faces(), [1, 1, 1, 6, 1, 1]);
    }

    #[test]
    fn test_mask_basics() {
        let mut mask = DiceMask::NONE;
        assert!(mask.is_empty());

        mask.insert(0);
        mask.insert(4);
        assert!(mask.contains(0));
        assert!(!mask.contains(1));
        assert!(mask.contains(4));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 4]);

        mask.toggle(0);
        assert!(!mask.contains(0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_mask_out_of_range_never_contained() {
        assert!(!DiceMask::ALL.contains(6));
        assert!(!DiceMask::ALL.contains(100));
        assert_eq!(DiceMask::from_indices(&[2, 6, 9]), DiceMask::from_indices(&[2]));
    }

    #[test]
    fn test_mask_set_ops() {
        let a = DiceMask::from_indices(&[0, 1, 2]);
        let b = DiceMask::from_indices(&[2, 3]);

        assert_eq!(a.union(b), DiceMask::from_indices(&[0, 1, 2, 3]));
        assert_eq!(a.difference(b), DiceMask::from_indices(&[0, 1]));
        assert_eq!(a.intersection(b), DiceMask::from_indices(&[2]));
        assert_eq!(a.complement(), DiceMask::from_indices(&[3, 4, 5]));
        assert_eq!(DiceMask::ALL.count(), DICE_COUNT);
    }

    #[test]
    fn test_mask_bools() {
        let flags = [true, false, false, true, false, true];
        let mask = DiceMask::from_bools(flags);
        assert_eq!(mask, DiceMask::from_indices(&[0, 3, 5]));
        assert_eq!(mask.to_bools(), flags);
    }
}
