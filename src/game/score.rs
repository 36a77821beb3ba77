//! End-of-game scoring.
//!
//! Pure aggregation over each player's captured set:
//!
//! - one point per captured ace
//! - one point for strictly the most cards, none on a tie
//! - one point for strictly the most spades, none on a tie
//! - one point each for the 10♦ and the 2♠
//! - one point per floor sweep ("suipi") credited during the game

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId, Suit};

use super::state::{RoundState, Seat};

/// One player's scorecard for one completed game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub aces: u8,
    pub most_cards: u8,
    pub most_spades: u8,
    pub ten_of_diamonds: u8,
    pub two_of_spades: u8,
    pub suipi_count: u8,
    pub total: u8,
}

/// Raw captured-set counts for one seat.
struct Tally {
    cards: usize,
    spades: usize,
    aces: u8,
    ten_of_diamonds: bool,
    two_of_spades: bool,
    sweeps: u8,
}

fn tally(seat: &Seat) -> Tally {
    Tally {
        cards: seat.captured.len(),
        spades: seat
            .captured
            .iter()
            .filter(|c| c.suit() == Suit::Spades)
            .count(),
        aces: seat.captured.iter().filter(|c| c.is_ace()).count() as u8,
        ten_of_diamonds: seat.captured.contains(&Card::TEN_OF_DIAMONDS),
        two_of_spades: seat.captured.contains(&Card::TWO_OF_SPADES),
        sweeps: seat.sweeps,
    }
}

fn finish(own: &Tally, other: &Tally) -> Scorecard {
    let mut card = Scorecard {
        aces: own.aces,
        most_cards: u8::from(own.cards > other.cards),
        most_spades: u8::from(own.spades > other.spades),
        ten_of_diamonds: u8::from(own.ten_of_diamonds),
        two_of_spades: u8::from(own.two_of_spades),
        suipi_count: own.sweeps,
        total: 0,
    };
    card.total = card.aces
        + card.most_cards
        + card.most_spades
        + card.ten_of_diamonds
        + card.two_of_spades
        + card.suipi_count;
    card
}

/// Score a finished game, opponent first.
#[must_use]
pub fn score_game(state: &RoundState) -> [Scorecard; 2] {
    let opponent = tally(&state.seats[PlayerId::OPPONENT]);
    let dealer = tally(&state.seats[PlayerId::DEALER]);
    [finish(&opponent, &dealer), finish(&dealer, &opponent)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_captures(opponent: Vec<Card>, dealer: Vec<Card>) -> RoundState {
        let mut state = RoundState::default();
        state.seats[PlayerId::OPPONENT].captured = opponent;
        state.seats[PlayerId::DEALER].captured = dealer;
        state
    }

    #[test]
    fn test_aces_count_one_each() {
        let state = state_with_captures(
            vec![Card::new(1, Suit::Clubs), Card::new(1, Suit::Hearts)],
            vec![Card::new(1, Suit::Diamonds)],
        );
        let [opp, dealer] = score_game(&state);
        assert_eq!(opp.aces, 2);
        assert_eq!(dealer.aces, 1);
    }

    #[test]
    fn test_majorities_require_strict_lead() {
        let state = state_with_captures(
            vec![Card::new(3, Suit::Spades), Card::new(4, Suit::Hearts)],
            vec![Card::new(5, Suit::Spades), Card::new(6, Suit::Clubs)],
        );
        let [opp, dealer] = score_game(&state);
        // Two cards each, one spade each: ties score for nobody.
        assert_eq!(opp.most_cards, 0);
        assert_eq!(dealer.most_cards, 0);
        assert_eq!(opp.most_spades, 0);
        assert_eq!(dealer.most_spades, 0);
    }

    #[test]
    fn test_point_cards() {
        let state = state_with_captures(
            vec![Card::TEN_OF_DIAMONDS],
            vec![Card::TWO_OF_SPADES],
        );
        let [opp, dealer] = score_game(&state);
        assert_eq!(opp.ten_of_diamonds, 1);
        assert_eq!(opp.two_of_spades, 0);
        assert_eq!(dealer.ten_of_diamonds, 0);
        assert_eq!(dealer.two_of_spades, 1);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let mut state = state_with_captures(
            vec![
                Card::new(1, Suit::Spades),
                Card::TEN_OF_DIAMONDS,
                Card::new(7, Suit::Spades),
                Card::new(9, Suit::Clubs),
            ],
            vec![Card::new(2, Suit::Hearts)],
        );
        state.seats[PlayerId::OPPONENT].sweeps = 2;
        let [opp, dealer] = score_game(&state);

        // 1 ace + most cards + most spades + 10♦ + 2 sweeps
        assert_eq!(opp.total, 1 + 1 + 1 + 1 + 0 + 2);
        assert_eq!(
            opp.total,
            opp.aces
                + opp.most_cards
                + opp.most_spades
                + opp.ten_of_diamonds
                + opp.two_of_spades
                + opp.suipi_count
        );
        assert_eq!(dealer.total, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Scorecard {
            aces: 2,
            most_cards: 1,
            most_spades: 0,
            ten_of_diamonds: 1,
            two_of_spades: 0,
            suipi_count: 3,
            total: 7,
        };
        let json = serde_json::to_string(&card).unwrap();
        let back: Scorecard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
