//! Players and the turn-order roster.
//!
//! ## PlayerId
//!
//! 0-based seat index. The first player to act is `PlayerId(0)`.
//!
//! ## Roster
//!
//! Fixed-size, ordered list of players indexed by `PlayerId`. Turn order
//! is round-robin over the roster.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index supporting up to 255 players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use farkle_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named player and their banked score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Points banked across completed turns.
    pub total_score: u32,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
        }
    }
}

/// Ordered players, one per seat.
///
/// Size is fixed at construction; the engine never adds or removes seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from display names, in seat order.
    ///
    /// Callers validate the count first (see `FarkleConfig::validate`).
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        debug_assert!(!names.is_empty() && names.len() <= 255);

        Self {
            players: names.iter().map(|n| Player::new(n.as_ref())).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat that acts after `player`, wrapping around.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId(((player.index() + 1) % self.players.len()) as u8)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Set every banked score back to zero.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.total_score = 0;
        }
    }

    /// Iterate over (PlayerId, &Player) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Banked scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.total_score).collect()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.players[player.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.players[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_roster_from_names() {
        let roster = Roster::from_names(&["Ann", "Bo", "Cy"]);

        assert_eq!(roster.player_count(), 3);
        assert_eq!(roster[PlayerId::new(1)].name, "Bo");
        assert_eq!(roster.scores(), vec![0, 0, 0]);
    }

    #[test]
    fn test_next_after_wraps() {
        let roster = Roster::from_names(&["A", "B", "C"]);

        assert_eq!(roster.next_after(PlayerId::new(0)), PlayerId::new(1));
        assert_eq!(roster.next_after(PlayerId::new(1)), PlayerId::new(2));
        assert_eq!(roster.next_after(PlayerId::new(2)), PlayerId::new(0));
    }

    #[test]
    fn test_reset_scores() {
        let mut roster = Roster::from_names(&["A", "B"]);
        roster[PlayerId::new(0)].total_score = 450;
        roster[PlayerId::new(1)].total_score = 1200;

        roster.reset_scores();

        assert_eq!(roster.scores(), vec![0, 0]);
        assert_eq!(roster[PlayerId::new(1)].name, "B");
    }

    #[test]
    fn test_iter_and_get() {
        let roster = Roster::from_names(&["A", "B"]);

        let pairs: Vec<_> = roster.iter().map(|(id, p)| (id, p.name.clone())).collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), "A".to_string()), (PlayerId::new(1), "B".to_string())]);
        assert!(roster.get(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_roster_serialization() {
        let mut roster = Roster::from_names(&["A", "B"]);
        roster[PlayerId::new(1)].total_score = 300;

        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
