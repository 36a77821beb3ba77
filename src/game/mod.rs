//! Match orchestration: table state, the move engine, turn and game flow,
//! house rules, and scoring.

pub mod config;
pub mod engine;
pub mod score;
pub mod state;

pub use config::{LeftoverPolicy, Rules};
pub use engine::{Game, GAMES_PER_MATCH};
pub use score::{score_game, Scorecard};
pub use state::{RoundState, Seat, MAX_BUILD_VALUE};
