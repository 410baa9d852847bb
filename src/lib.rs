//! Mastermind
//!
//! A classic code-breaking game: find the hidden color code within a fixed
//! number of rounds, guided by black (exact) and white (color-only) pins.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Palette, Score};
//! use mastermind::game::{Evaluator, FixedSecret};
//!
//! let palette = Palette::classic();
//! let secret = palette.code_from_labels("RGBY").unwrap();
//! let evaluator = Evaluator::new(palette, 4, FixedSecret::new(secret)).unwrap();
//!
//! let guess = evaluator.palette().code_from_labels("RRGG").unwrap();
//! assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(1, 1));
//! ```

// Core domain types
pub mod core;

// Game logic and secret generation
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
