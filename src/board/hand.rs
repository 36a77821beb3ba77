//! A player's hand: eight fixed card slots.
//!
//! Slots keep their position for the life of a round so that annotation
//! slot numbers stay stable; a played card leaves a hole rather than
//! shifting its neighbors.

use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::error::MoveError;

/// Number of hand slots per player.
pub const HAND_SIZE: usize = 8;

/// Fixed-capacity card holder for one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Hand {
        Hand::default()
    }

    /// Read the card at a slot.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// All eight slots, empty-padded.
    #[must_use]
    pub fn slots(&self) -> &[Option<Card>; HAND_SIZE] {
        &self.slots
    }

    /// Remove and return the card at a slot.
    ///
    /// Fails with `EmptySlot` if no card is there.
    pub fn remove(&mut self, index: usize) -> Result<Card, MoveError> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(MoveError::EmptySlot)
    }

    /// Deal cards into empty slots, left to right.
    ///
    /// Fails with `HandFull` if there are more cards than holes; no cards
    /// are placed in that case.
    pub fn deal(&mut self, cards: &[Card]) -> Result<(), MoveError> {
        let holes = self.slots.iter().filter(|s| s.is_none()).count();
        if cards.len() > holes {
            return Err(MoveError::HandFull);
        }
        let mut cards = cards.iter();
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                match cards.next() {
                    Some(&card) => *slot = Some(card),
                    None => break,
                }
            }
        }
        Ok(())
    }

    /// Number of cards held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Is the hand empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Does the hand hold a card of this rank?
    #[must_use]
    pub fn holds_rank(&self, rank: u8) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|card| card.rank() == rank)
    }

    /// Iterate over held cards.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }
}
