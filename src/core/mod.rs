//! Core engine types: cards, seeded RNG, and player identifiers.

pub mod card;
pub mod player;
pub mod rng;

pub use card::{Card, Suit, DECK_SIZE, EMPTY_CARD, RANK_COUNT};
pub use player::{PlayerId, PlayerPair};
pub use rng::{read_seed, GameRng, Seed};
