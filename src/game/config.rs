//! Match policy configuration.
//!
//! Two points of Suipi's end-of-game and build law vary by house rule, so
//! they are configuration rather than convention. The defaults follow the
//! most common Cassino-family treatment.

use serde::{Deserialize, Serialize};

/// Who collects cards left on the floor when the deck runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeftoverPolicy {
    /// The player who made the last capture of the game. If nobody ever
    /// captured, the leftovers score for no one.
    LastCapturer,
    /// The dealer, regardless of play.
    Dealer,
}

/// House rules for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// End-of-game floor disposition.
    pub leftovers: LeftoverPolicy,
    /// Whether a build is only legal while its owner still holds a card of
    /// the declared rank. Disabling leaves just the structural sum check.
    pub build_rank_must_be_held: bool,
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            leftovers: LeftoverPolicy::LastCapturer,
            build_rank_must_be_held: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = Rules::default();
        assert_eq!(rules.leftovers, LeftoverPolicy::LastCapturer);
        assert!(rules.build_rank_must_be_held);
    }
}
