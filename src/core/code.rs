//! Color code sequences

use super::Color;
use std::fmt;

/// An ordered sequence of peg colors
///
/// Used for both the hidden secret and submitted guesses. A code carries
/// no length constraint of its own; the evaluator enforces that guesses
/// match the secret's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Color>);

impl Code {
    /// Create a code from a color sequence
    #[inline]
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colors, in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// The color at a position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
