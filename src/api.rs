//! Flat function boundary for embedding clients.
//!
//! UI front ends and scripting hosts want plain-old-data views and string
//! moves, not borrow-aware engine types. This module wraps the engine in
//! exactly that: fixed-size byte arrays for cards (with `EMPTY_CARD`
//! padding), one status struct, and an `apply_move` that reports errors as
//! text instead of panicking.

use serde::{Deserialize, Serialize};

use crate::board::{FLOOR_SLOTS, HAND_SIZE, PILE_CAPACITY};
use crate::core::{Card, Seed, EMPTY_CARD};
use crate::game::{Game, Scorecard};

/// Match status snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The seed the match can be replayed from.
    pub seed: Seed,
    /// Game number, 0 or 1; 2 once the match is over.
    pub game: u8,
    /// Deal number within the game, 0 to 2.
    pub round: u8,
    /// Seat to move: 0 = opponent, 1 = dealer.
    pub turn: u8,
    /// Occupied floor slots.
    pub floor: u8,
}

/// One floor pile as plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    /// Card ids, padded with `EMPTY_CARD`.
    pub cards: [u8; PILE_CAPACITY],
    /// Declared capture value; 0 for an empty slot.
    pub value: u8,
    /// Is this a build pile?
    pub build: bool,
    /// Owning seat for a build, `EMPTY_CARD` otherwise.
    pub owner: u8,
}

impl Default for PileView {
    fn default() -> PileView {
        PileView {
            cards: [EMPTY_CARD; PILE_CAPACITY],
            value: 0,
            build: false,
            owner: EMPTY_CARD,
        }
    }
}

/// Start a match, seeded for replay or freshly randomized.
#[must_use]
pub fn new_game(seed: Option<Seed>) -> Game {
    match seed {
        Some(seed) => Game::new(seed),
        None => Game::default(),
    }
}

/// Current match status.
#[must_use]
pub fn status(game: &Game) -> Status {
    Status {
        seed: game.seed(),
        game: game.game_number(),
        round: game.round_number(),
        turn: game.state.turn.0,
        floor: game.state.floor_count() as u8,
    }
}

/// All 13 floor piles as plain data.
#[must_use]
pub fn read_floor(game: &Game) -> [PileView; FLOOR_SLOTS] {
    let mut views = [PileView::default(); FLOOR_SLOTS];
    for (view, pile) in views.iter_mut().zip(game.state.floor.iter()) {
        for (out, card) in view.cards.iter_mut().zip(pile.cards.iter()) {
            *out = card.id();
        }
        view.value = pile.value;
        view.build = pile.is_build();
        view.owner = pile.owner.map_or(EMPTY_CARD, |p| p.0);
    }
    views
}

/// The current player's hand as card ids, empty slots as `EMPTY_CARD`.
#[must_use]
pub fn read_hand(game: &Game) -> [u8; HAND_SIZE] {
    let mut hand = [EMPTY_CARD; HAND_SIZE];
    for (out, slot) in hand.iter_mut().zip(game.state.player().hand.slots()) {
        *out = slot.map_or(EMPTY_CARD, Card::id);
    }
    hand
}

/// Apply a move annotation for the player to act.
///
/// Returns an empty string on success and the error text on failure.
/// Malformed input is an error, never a panic.
pub fn apply_move(game: &mut Game, annotation: &str) -> String {
    match game.apply_annotation(annotation) {
        Ok(()) => String::new(),
        Err(error) => error.to_string(),
    }
}

/// Hand play to the other seat (redealing or ending the game as needed).
pub fn next_turn(game: &mut Game) {
    game.next_turn();
}

/// Roll back the last successful move of the current game.
pub fn undo(game: &mut Game) -> bool {
    game.undo()
}

/// Scorecards for both games, indexed `game * 2 + seat`. Unplayed games
/// score zero across the board.
#[must_use]
pub fn get_scores(game: &Game) -> [Scorecard; 4] {
    *game.scores()
}
