//! The floor: 13 capturable pile slots shared by both players.
//!
//! The floor never reorders piles; a pile stays at its slot until captured.
//! Guards that need only pile-local context live here (`NotBuildOwner`,
//! `ValueMismatch`); move-level legality is the move engine's job.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId};
use crate::error::MoveError;

use super::pile::{Pile, PileCards};

/// Number of floor slots.
pub const FLOOR_SLOTS: usize = 13;

/// The shared board of capturable piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    slots: [Pile; FLOOR_SLOTS],
}

impl Floor {
    /// An empty floor.
    #[must_use]
    pub fn new() -> Floor {
        Floor::default()
    }

    /// Read the pile at a slot.
    #[must_use]
    pub fn pile(&self, index: usize) -> &Pile {
        &self.slots[index]
    }

    /// Is the slot occupied?
    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        index < FLOOR_SLOTS && !self.slots[index].is_empty()
    }

    /// Number of occupied slots. Zero means the floor was just swept.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|p| !p.is_empty()).count()
    }

    /// Place a card as a new loose pile at an empty slot.
    pub fn place_loose(&mut self, index: usize, card: Card) {
        debug_assert!(self.slots[index].is_empty());
        self.slots[index] = Pile::single(card);
    }

    /// Install a freshly assembled build pile at a slot.
    ///
    /// The slot may be one of the slots just vacated by the combination.
    pub fn start_build(&mut self, index: usize, pile: Pile) {
        debug_assert!(self.slots[index].is_empty());
        debug_assert!(pile.is_build());
        self.slots[index] = pile;
    }

    /// Extend a build pile in place.
    ///
    /// Fails with `NotBuildOwner` unless `actor` owns the build.
    pub fn add_to_build(
        &mut self,
        index: usize,
        cards: PileCards,
        value: u8,
        units: u8,
        actor: PlayerId,
    ) -> Result<(), MoveError> {
        let pile = &mut self.slots[index];
        match pile.owner {
            Some(owner) if owner == actor => {
                pile.cards.extend(cards);
                pile.value = value;
                pile.units = units;
                Ok(())
            }
            _ => Err(MoveError::NotBuildOwner),
        }
    }

    /// Capture a pile with a card of the given rank.
    ///
    /// Fails with `ValueMismatch` unless the rank equals the pile's
    /// declared value. On success the slot is cleared and the pile's cards
    /// are returned for the capturing player's set.
    pub fn capture(&mut self, index: usize, rank: u8) -> Result<PileCards, MoveError> {
        if self.slots[index].value != rank {
            return Err(MoveError::ValueMismatch);
        }
        Ok(self.slots[index].take_cards())
    }

    /// Clear a slot unconditionally, returning its cards.
    ///
    /// Used by multi-pile captures and build assembly after the move
    /// engine has already validated the combination.
    pub fn take(&mut self, index: usize) -> PileCards {
        self.slots[index].take_cards()
    }

    /// Iterate over all 13 slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.slots.iter()
    }

    /// Every card currently on the floor.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flat_map(|p| p.cards.iter().copied())
    }

    /// The lowest-indexed empty slot, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Pile::is_empty)
    }

    /// Does any non-build pile declare this rank?
    ///
    /// This is the trail guard: trailing a card of a rank that already sits
    /// loose on the floor is stalling, the player must capture instead.
    #[must_use]
    pub fn has_unbuilt_rank(&self, rank: u8) -> bool {
        self.slots
            .iter()
            .any(|p| !p.is_empty() && !p.is_build() && p.value == rank)
    }

    /// The slot index of the build owned by `player`, if one exists.
    #[must_use]
    pub fn owned_build(&self, player: PlayerId) -> Option<usize> {
        self.slots.iter().position(|p| p.owner == Some(player))
    }
}
