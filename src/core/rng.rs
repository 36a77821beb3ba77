//! Deterministic random number generation.
//!
//! A game's entire shuffle order is a pure function of a 256-bit seed:
//! the same seed always produces byte-identical deals, which makes games
//! reproducible and regression-testable. When the caller supplies no seed,
//! the engine generates one and reports it through `status` so the match
//! can be replayed later.
//!
//! The only durable artifact the engine understands is a seed file: one
//! byte per line, 32 lines. `read_seed` parses that format.

use rand::prelude::random;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufReader, Read, Result as IoResult};

/// A 256-bit shuffle seed.
pub type Seed = [u8; 32];

/// Deterministic RNG backing every deal in a match.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Seed,
}

impl GameRng {
    /// Create an RNG from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            inner: ChaCha8Rng::from_seed(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly generated random seed.
    ///
    /// The seed is retained and reported via `seed()` for replay.
    #[must_use]
    pub fn random() -> Self {
        Self::from_seed(random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed([0; 32])
    }
}

/// Parse a seed file: one byte per line, 32 lines.
///
/// Unparseable lines are skipped; missing trailing bytes stay zero.
pub fn read_seed<R: Read>(reader: R) -> IoResult<Seed> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;
    let mut seed = [0; 32];
    text.lines()
        .filter_map(|line| line.trim().parse::<u8>().ok())
        .take(32)
        .enumerate()
        .for_each(|(i, byte)| seed[i] = byte);
    Ok(seed)
}
