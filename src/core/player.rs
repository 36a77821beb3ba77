//! Player identification and per-player data storage.
//!
//! Suipi is strictly two-seat: the opponent (who leads the first game) and
//! the dealer. `PlayerPair` stores one value per seat with O(1) indexing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Player identifier: 0 = Opponent, 1 = Dealer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The non-dealing player; leads the first game.
    pub const OPPONENT: PlayerId = PlayerId(0);

    /// The dealer; leads the second game.
    pub const DEALER: PlayerId = PlayerId(1);

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn flip(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats, opponent first.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::OPPONENT, PlayerId::DEALER]
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayerId::DEALER => write!(f, "Dealer"),
            _ => write!(f, "Opponent"),
        }
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::OPPONENT), factory(PlayerId::DEALER)],
        }
    }

    /// Iterate over (PlayerId, &T) pairs, opponent first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(PlayerId::OPPONENT.flip(), PlayerId::DEALER);
        assert_eq!(PlayerId::DEALER.flip(), PlayerId::OPPONENT);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::OPPONENT.to_string(), "Opponent");
        assert_eq!(PlayerId::DEALER.to_string(), "Dealer");
    }

    #[test]
    fn test_pair_indexing() {
        let mut pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32 * 10);
        assert_eq!(pair[PlayerId::OPPONENT], 0);
        assert_eq!(pair[PlayerId::DEALER], 10);

        pair[PlayerId::OPPONENT] = 7;
        assert_eq!(pair[PlayerId::OPPONENT], 7);
    }

    #[test]
    fn test_pair_iter_order() {
        let pair: PlayerPair<&str> = PlayerPair::new(|p| {
            if p == PlayerId::DEALER {
                "dealer"
            } else {
                "opponent"
            }
        });
        let seats: Vec<_> = pair.iter().collect();
        assert_eq!(seats[0], (PlayerId::OPPONENT, &"opponent"));
        assert_eq!(seats[1], (PlayerId::DEALER, &"dealer"));
    }
}
