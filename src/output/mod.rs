//! Terminal output formatting
//!
//! Display utilities for pegs and result pins.

pub mod formatters;

pub use formatters::{colored_pegs, score_pins};
