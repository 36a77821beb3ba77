//! The board: floor piles and player hands.

pub mod floor;
pub mod hand;
pub mod pile;

pub use floor::{Floor, FLOOR_SLOTS};
pub use hand::{Hand, HAND_SIZE};
pub use pile::{Pile, PileCards, PILE_CAPACITY};
