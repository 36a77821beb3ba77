//! The move annotation grammar.
//!
//! A move names exactly one hand card and a floor action:
//!
//! ```text
//! move     := handSlot action
//! handSlot := '1'..'8'              1-based slot in the current hand
//! action   := letters [ '=' value ]
//! letters  := ('A'..'M')+           floor slots, case-insensitive
//! value    := 1..13                 declared build value
//! ```
//!
//! Without `=` the letters are capture targets, except that a single
//! letter naming an empty slot trails the card there. With `=` the played
//! card and the named piles combine into a build of the stated value.
//!
//! Parsing is purely syntactic; whether the named slots are occupied and
//! the values line up is the move engine's concern.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::board::{FLOOR_SLOTS, HAND_SIZE};
use crate::error::MoveError;

/// Floor slots named by one move.
pub type Targets = SmallVec<[usize; 4]>;

/// A parsed move annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Hand slot of the played card, 0-based.
    pub slot: usize,
    /// Floor slots named by the action, 0-based, in annotation order.
    pub targets: Targets,
    /// Declared build value, if this is a build.
    pub build: Option<u8>,
}

impl Move {
    /// A capture (or single-letter trail) move.
    #[must_use]
    pub fn capture(slot: usize, targets: &[usize]) -> Move {
        Move {
            slot,
            targets: SmallVec::from_slice(targets),
            build: None,
        }
    }

    /// A build move with a declared value.
    #[must_use]
    pub fn build(slot: usize, targets: &[usize], value: u8) -> Move {
        Move {
            slot,
            targets: SmallVec::from_slice(targets),
            build: Some(value),
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(text: &str) -> Result<Move, MoveError> {
        let mut chars = text.trim().chars();

        let slot = match chars.next() {
            Some(c @ '1'..='8') => c as usize - '1' as usize,
            _ => return Err(MoveError::MalformedMove),
        };
        debug_assert!(slot < HAND_SIZE);

        let mut targets = Targets::new();
        let mut build = None;
        while let Some(c) = chars.next() {
            match c.to_ascii_uppercase() {
                letter @ 'A'..='M' => {
                    let index = letter as usize - 'A' as usize;
                    debug_assert!(index < FLOOR_SLOTS);
                    if targets.contains(&index) {
                        return Err(MoveError::MalformedMove);
                    }
                    targets.push(index);
                }
                '=' => {
                    let value: u8 = chars
                        .as_str()
                        .trim()
                        .parse()
                        .map_err(|_| MoveError::MalformedMove)?;
                    if !(1..=13).contains(&value) {
                        return Err(MoveError::MalformedMove);
                    }
                    build = Some(value);
                    break;
                }
                _ => return Err(MoveError::MalformedMove),
            }
        }

        if targets.is_empty() {
            return Err(MoveError::MalformedMove);
        }

        Ok(Move {
            slot,
            targets,
            build,
        })
    }
}
