//! Card codec: card ids, ranks, and suits.
//!
//! Cards are value types identified by a single byte in `0..52`:
//!
//! - `rank = id % 13 + 1` (1 = Ace .. 13 = King)
//! - `suit = id / 13` (Clubs, Diamonds, Hearts, Spades)
//!
//! Any id of 52 or above denotes an empty slot at the API boundary; inside
//! the engine empty slots are `Option<Card>` and a `Card` is always valid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of cards in a full deck.
pub const DECK_SIZE: u8 = 52;

/// Sentinel id for an empty card slot at the API boundary.
pub const EMPTY_CARD: u8 = 52;

/// Playing card suits, in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in id order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Get a suit from its id (0..4).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }

    /// The suit's position in id order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn glyph(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card, identified by its id in `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// The 10♦ point card.
    pub const TEN_OF_DIAMONDS: Card = Card(13 + 9);

    /// The 2♠ point card.
    pub const TWO_OF_SPADES: Card = Card(39 + 1);

    /// Create a card from a rank (1..=13) and a suit.
    ///
    /// Panics if `rank` is out of range.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Card {
        assert!((1..=RANK_COUNT).contains(&rank), "rank must be 1..=13");
        Card(suit.index() * RANK_COUNT + rank - 1)
    }

    /// Decode a card from its id. Ids of 52 and above are the empty sentinel.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Card> {
        if id < DECK_SIZE {
            Some(Card(id))
        } else {
            None
        }
    }

    /// The card's id in `0..52`.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// The card's rank, 1 = Ace .. 13 = King.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % RANK_COUNT + 1
    }

    /// The card's suit.
    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANK_COUNT) as usize]
    }

    /// Is this card an ace?
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank() == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            1 => write!(f, "A{}", self.suit()),
            11 => write!(f, "J{}", self.suit()),
            12 => write!(f, "Q{}", self.suit()),
            13 => write!(f, "K{}", self.suit()),
            n => write!(f, "{}{}", n, self.suit()),
        }
    }
}
