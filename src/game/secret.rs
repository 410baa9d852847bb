//! Secret generation strategies
//!
//! Defines the `SecretSource` trait and concrete implementations. The
//! evaluator is polymorphic over its source, so tests substitute a fixed
//! secret without touching any random state.

use crate::core::{Code, Palette};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for producing the hidden secret
pub trait SecretSource {
    /// Produce a secret of `length` pegs drawn from `palette`
    fn draw(&mut self, palette: &Palette, length: usize) -> Code;
}

/// Uniform random secret generation (the default source)
///
/// Each peg is drawn independently and uniformly over the palette's
/// colors, with replacement.
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Create a source seeded from the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a source with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSource for UniformRandom {
    fn draw(&mut self, palette: &Palette, length: usize) -> Code {
        (0..length)
            .filter_map(|_| palette.colors().choose(&mut self.rng).copied())
            .collect()
    }
}

/// A source that always returns the same predetermined code
///
/// Intended for tests and demonstrations. The requested length is
/// ignored; the evaluator adopts the code's own length as the game's
/// code length.
pub struct FixedSecret(Code);

impl FixedSecret {
    /// Create a source returning `code` on every draw
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self(code)
    }
}

impl SecretSource for FixedSecret {
    fn draw(&mut self, _palette: &Palette, _length: usize) -> Code {
        self.0.clone()
    }
}
