//! # suipi-core
//!
//! A deterministic two-player Suipi (Cassino-family) card capture
//! engine. The engine owns the deck, the 13-slot floor, both hands, the
//! turn/round/game progression, and the end-of-game scoring; callers drive
//! it through a small synchronous API and render state however they like.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The entire match is a pure function of a 32-byte
//!    seed and the move sequence. Same seed, same moves, same state.
//!
//! 2. **Atomic Moves**: A rejected move is a no-op. The engine validates
//!    fully before mutating and rolls back on failure, so callers can retry
//!    with corrected input.
//!
//! 3. **Single Owner**: A `Game` is an independent, self-contained value
//!    with no shared mutable state. Hosts serving multiple callers must
//!    serialize access per instance.
//!
//! ## Modules
//!
//! - `core`: Card codec, seeded RNG, player identifiers
//! - `board`: Floor piles and hands
//! - `moves`: Move annotation grammar
//! - `game`: Round state, the move engine, match progression, scoring
//! - `api`: The external function-call boundary consumed by clients

pub mod core;
pub mod board;
pub mod moves;
pub mod game;
pub mod api;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Card, Suit, Seed, GameRng, PlayerId, PlayerPair};
pub use crate::board::{Pile, Floor, Hand, FLOOR_SLOTS, HAND_SIZE, PILE_CAPACITY};
pub use crate::moves::Move;
pub use crate::game::{Game, RoundState, Seat, Rules, LeftoverPolicy, Scorecard};
pub use crate::error::MoveError;
