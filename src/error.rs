//! Move rejection reasons.
//!
//! Every variant is recoverable by retry: the engine validates before it
//! mutates, so a failed move leaves the game untouched and the caller can
//! re-prompt. Internal invariant breaches (card conservation) are
//! programming defects, checked by `RoundState::audit` in tests, and are
//! deliberately not represented here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasons a move can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The annotation text could not be parsed.
    MalformedMove,
    /// The named hand slot holds no card.
    EmptySlot,
    /// A floor address is out of range or names an empty slot.
    NoSuchPile,
    /// The named piles do not match the played card's rank.
    ValueMismatch,
    /// The build value is out of range, does not match the combined cards,
    /// or names a rank the builder can no longer capture with.
    IllegalBuildValue,
    /// Only the owner of a build may extend it.
    NotBuildOwner,
    /// Trailing is forbidden while a matching capture is on the floor.
    MustCapture,
    /// Dealing past the 8-slot hand capacity.
    HandFull,
    /// A player may own at most one build at a time.
    TooManyBuilds,
    /// The move would spend the last hand card the player's own build needs.
    OrphanedBuild,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::MalformedMove => "malformed move annotation",
            MoveError::EmptySlot => "no card in that hand slot",
            MoveError::NoSuchPile => "no pile at that floor address",
            MoveError::ValueMismatch => "those piles do not match the played card",
            MoveError::IllegalBuildValue => "that build value cannot be made",
            MoveError::NotBuildOwner => "only the build's owner may extend it",
            MoveError::MustCapture => "a matching capture is available, cannot trail",
            MoveError::HandFull => "hand is already full",
            MoveError::TooManyBuilds => "you may only own one build at a time",
            MoveError::OrphanedBuild => "that move would orphan your build",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for MoveError {}
