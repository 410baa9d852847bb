//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero game-state
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod code;
mod color;
mod palette;
mod score;

pub use code::Code;
pub use color::Color;
pub use palette::{CLASSIC_SIZE, Palette, PaletteError};
pub use score::Score;
