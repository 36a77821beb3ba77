//! A single floor pile: loose card, build, or matched group.
//!
//! Every occupied pile carries a declared `value` (the rank that captures
//! it) and a `units` count, the number of same-value combinations stacked
//! inside it. A loose card is one unit of its own rank. A build made by
//! summing cards is one unit and may later be raised by its owner; once a
//! pile holds more than one unit (a matched group) its value is fixed.
//!
//! `owner` is the build flag: `Some(player)` marks a builder-owned pile
//! that only its owner may extend. Loose cards are never owned.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{Card, PlayerId};

/// Cards held by one pile.
pub type PileCards = SmallVec<[Card; 4]>;

/// Maximum cards one pile can hold, fixed by the API boundary layout.
pub const PILE_CAPACITY: usize = 20;

/// One floor slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    /// Cards in the pile, in the order they were combined.
    pub cards: PileCards,
    /// The rank that captures this pile. Zero when empty.
    pub value: u8,
    /// Number of same-value combinations inside the pile. Zero when empty.
    pub units: u8,
    /// The owning player when this pile is a build.
    pub owner: Option<PlayerId>,
}

impl Pile {
    /// An empty slot.
    #[must_use]
    pub fn empty() -> Pile {
        Pile::default()
    }

    /// A single loose card.
    #[must_use]
    pub fn single(card: Card) -> Pile {
        Pile {
            cards: SmallVec::from_slice(&[card]),
            value: card.rank(),
            units: 1,
            owner: None,
        }
    }

    /// A builder-owned pile with a declared value.
    #[must_use]
    pub fn build(cards: PileCards, value: u8, units: u8, owner: PlayerId) -> Pile {
        debug_assert!(cards.len() >= 2);
        debug_assert!(cards.len() <= PILE_CAPACITY);
        Pile {
            cards,
            value,
            units,
            owner: Some(owner),
        }
    }

    /// Is this slot empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is this a single loose card?
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.cards.len() == 1
    }

    /// Is this a builder-owned pile?
    #[must_use]
    pub fn is_build(&self) -> bool {
        self.owner.is_some()
    }

    /// Can this pile's declared value still be raised?
    ///
    /// Only single-combination builds may grow to a higher value; matched
    /// groups are locked at theirs.
    #[must_use]
    pub fn is_raisable(&self) -> bool {
        self.is_build() && self.units == 1
    }

    /// Remove and return every card, leaving the slot empty.
    pub fn take_cards(&mut self) -> PileCards {
        let cards = std::mem::take(&mut self.cards);
        self.value = 0;
        self.units = 0;
        self.owner = None;
        cards
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else if self.is_single() {
            write!(f, "({})", self.cards[0])
        } else {
            let cards = self
                .cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" + ");
            write!(f, "{}{{{}}}", self.value, cards)
        }
    }
}
