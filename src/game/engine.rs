//! The match engine.
//!
//! A `Game` plays a best-of-two-games Suipi match from a single 32-byte
//! seed. It owns the table state, the deterministic RNG, the house rules,
//! and a snapshot history for undo. Moves are applied atomically: an
//! illegal move leaves the table exactly as it was.
//!
//! Turn advancement is explicit. `apply` resolves a move for the player
//! to act; `next_turn` hands play over, dealing fresh hands when both run
//! empty and rolling the match forward when the deck does too.

use im::Vector;
use log::{debug, info};

use crate::core::{GameRng, PlayerId, Seed};
use crate::error::MoveError;
use crate::moves::Move;

use super::config::{LeftoverPolicy, Rules};
use super::score::{score_game, Scorecard};
use super::state::RoundState;

/// Games per match; players swap the deal in between.
pub const GAMES_PER_MATCH: u8 = 2;

/// A Suipi match in progress.
#[derive(Clone, Debug)]
pub struct Game {
    /// Table state for the game in progress.
    pub state: RoundState,
    rng: GameRng,
    rules: Rules,
    /// Pre-move snapshots for the current game, oldest first.
    history: Vector<RoundState>,
    game: u8,
    round: u8,
    scores: [Scorecard; 4],
}

impl Default for Game {
    fn default() -> Game {
        Game::new(rand::random())
    }
}

impl Game {
    /// A new match from a seed, with default rules. Deals the first game.
    #[must_use]
    pub fn new(seed: Seed) -> Game {
        Game::with_rules(seed, Rules::default())
    }

    /// A new match from a seed and explicit house rules.
    #[must_use]
    pub fn with_rules(seed: Seed, rules: Rules) -> Game {
        let mut game = Game {
            state: RoundState::new(Game::lead(0)),
            rng: GameRng::from_seed(seed),
            rules,
            history: Vector::new(),
            game: 0,
            round: 0,
            scores: [Scorecard::default(); 4],
        };
        game.deal();
        game
    }

    /// The player who leads a given game. The deal alternates.
    fn lead(game: u8) -> PlayerId {
        if game % 2 == 0 {
            PlayerId::OPPONENT
        } else {
            PlayerId::DEALER
        }
    }

    fn deal(&mut self) {
        self.state.stock_deck();
        self.state.shuffle_deck(&mut self.rng);
        self.state.deal_hands();
        self.state.deal_floor();
        info!(
            "game {} dealt, {} to move",
            self.game + 1,
            self.state.turn
        );
    }

    /// The match seed.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.rng.seed()
    }

    /// The house rules in force.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Game number, 0 or 1 (equals `GAMES_PER_MATCH` once the match ends).
    #[must_use]
    pub fn game_number(&self) -> u8 {
        self.game
    }

    /// Deal number within the current game, 0 to 2.
    #[must_use]
    pub fn round_number(&self) -> u8 {
        self.round
    }

    /// Scorecards for both games, opponent then dealer per game.
    #[must_use]
    pub fn scores(&self) -> &[Scorecard; 4] {
        &self.scores
    }

    /// Has the whole match been played out?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game >= GAMES_PER_MATCH
    }

    /// Apply a move for the player whose turn it is.
    ///
    /// Atomic: on error the table is untouched. On success the pre-move
    /// state is pushed onto the undo history.
    pub fn apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        let snapshot = self.state.clone();
        match self.state.apply(mv, &self.rules) {
            Ok(()) => {
                self.history.push_back(snapshot);
                Ok(())
            }
            Err(error) => {
                self.state = snapshot;
                debug!("{} move rejected: {}", self.state.turn, error);
                Err(error)
            }
        }
    }

    /// Parse and apply an annotation such as `"3C"` or `"2AB=9"`.
    pub fn apply_annotation(&mut self, annotation: &str) -> Result<(), MoveError> {
        let mv: Move = annotation.parse()?;
        self.apply(&mv)
    }

    /// Roll back the most recent successful move of the current game.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(snapshot) => {
                self.state = snapshot;
                true
            }
            None => false,
        }
    }

    /// Hand play to the other player, redealing or ending as needed.
    ///
    /// When both hands are empty the next eight cards each are dealt; when
    /// the deck is empty too, floor leftovers go to the rules' recipient,
    /// the game is scored, and the next game (if any) is dealt. A no-op
    /// once the match is over.
    pub fn next_turn(&mut self) {
        if self.is_over() {
            return;
        }
        self.state.turn = self.state.turn.flip();
        if !self.state.hands_empty() {
            return;
        }
        if !self.state.deck.is_empty() {
            self.state.deal_hands();
            self.round += 1;
            debug!("round {} dealt", self.round + 1);
            return;
        }
        self.finish_game();
    }

    fn finish_game(&mut self) {
        if let Some(recipient) = self.leftover_recipient() {
            self.state.pickup_floor(recipient);
        }
        let [opponent, dealer] = score_game(&self.state);
        let base = usize::from(self.game) * 2;
        self.scores[base] = opponent;
        self.scores[base + 1] = dealer;
        info!(
            "game {} over: {} to {}",
            self.game + 1,
            opponent.total,
            dealer.total
        );

        self.game += 1;
        self.round = 0;
        self.history.clear();
        if self.game < GAMES_PER_MATCH {
            self.state = RoundState::new(Game::lead(self.game));
            self.deal();
        }
    }

    fn leftover_recipient(&self) -> Option<PlayerId> {
        match self.rules.leftovers {
            LeftoverPolicy::LastCapturer => self.state.last_capturer,
            LeftoverPolicy::Dealer => Some(PlayerId::DEALER),
        }
    }
}
