//! The palette: the fixed set of peg colors eligible for secrets and guesses
//!
//! A palette pairs each color with a single-character label. The label at
//! index i names the color at index i; that correspondence is validated at
//! construction and relied on everywhere else.

use super::{Code, Color};
use std::fmt;

/// Colors of the classic peg set, in board order
const CLASSIC_COLORS: [Color; 8] = [
    Color::rgb(0xd6, 0x2f, 0x2f), // red
    Color::rgb(0x2e, 0xa0, 0x4e), // green
    Color::rgb(0x1e, 0x6f, 0xd8), // blue
    Color::rgb(0xf0, 0xc8, 0x00), // yellow
    Color::rgb(0xf0, 0x82, 0x14), // orange
    Color::rgb(0x96, 0x3c, 0xb4), // purple
    Color::rgb(0x17, 0xb8, 0xc8), // cyan
    Color::rgb(0xe0, 0x3c, 0xa0), // magenta
];

/// Labels of the classic peg set, matching `CLASSIC_COLORS` by index
const CLASSIC_LABELS: [char; 8] = ['R', 'G', 'B', 'Y', 'O', 'P', 'C', 'M'];

/// Number of classic colors in play by default
pub const CLASSIC_SIZE: usize = 6;

/// Error type for invalid palettes and failed label lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Color list and label list have different lengths
    LabelCountMismatch { colors: usize, labels: usize },
    /// A palette must contain at least one color
    Empty,
    /// The same color appears twice
    DuplicateColor(Color),
    /// The same label appears twice
    DuplicateLabel(char),
    /// Requested classic prefix outside the supported 2..=8 range
    UnsupportedSize(usize),
    /// A label that names no palette color
    UnknownLabel(char),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelCountMismatch { colors, labels } => {
                write!(f, "Palette has {colors} colors but {labels} labels")
            }
            Self::Empty => write!(f, "Palette must contain at least one color"),
            Self::DuplicateColor(color) => {
                write!(f, "Palette color {color} appears more than once")
            }
            Self::DuplicateLabel(label) => {
                write!(f, "Palette label '{label}' appears more than once")
            }
            Self::UnsupportedSize(count) => {
                write!(
                    f,
                    "Classic palette supports 2-{} colors, got {count}",
                    CLASSIC_COLORS.len()
                )
            }
            Self::UnknownLabel(label) => write!(f, "No palette color labeled '{label}'"),
        }
    }
}

impl std::error::Error for PaletteError {}

/// An ordered set of distinct peg colors with their display labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    labels: Vec<char>,
}

impl Palette {
    /// Create a palette from parallel color and label lists
    ///
    /// # Errors
    /// Returns `PaletteError` if:
    /// - The lists have different lengths
    /// - The lists are empty
    /// - A color or label appears more than once
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::new(
    ///     vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
    ///     vec!['R', 'G'],
    /// )
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    ///
    /// assert!(Palette::new(vec![Color::rgb(255, 0, 0)], vec!['R', 'G']).is_err());
    /// ```
    pub fn new(colors: Vec<Color>, labels: Vec<char>) -> Result<Self, PaletteError> {
        if colors.len() != labels.len() {
            return Err(PaletteError::LabelCountMismatch {
                colors: colors.len(),
                labels: labels.len(),
            });
        }

        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PaletteError::DuplicateColor(*color));
            }
        }

        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(PaletteError::DuplicateLabel(*label));
            }
        }

        Ok(Self { colors, labels })
    }

    /// The classic six-color palette (R G B Y O P)
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: CLASSIC_COLORS[..CLASSIC_SIZE].to_vec(),
            labels: CLASSIC_LABELS[..CLASSIC_SIZE].to_vec(),
        }
    }

    /// A prefix of the classic palette with the given number of colors
    ///
    /// # Errors
    /// Returns `PaletteError::UnsupportedSize` unless `count` is in 2..=8.
    pub fn classic_with(count: usize) -> Result<Self, PaletteError> {
        if !(2..=CLASSIC_COLORS.len()).contains(&count) {
            return Err(PaletteError::UnsupportedSize(count));
        }

        Ok(Self {
            colors: CLASSIC_COLORS[..count].to_vec(),
            labels: CLASSIC_LABELS[..count].to_vec(),
        })
    }

    /// Number of colors in the palette
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty (never true for a constructed palette)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette colors, in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The palette labels, in order
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    /// Look up the label of a palette color
    ///
    /// Returns `None` if the color is not a palette member.
    #[must_use]
    pub fn label_of(&self, color: Color) -> Option<char> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| self.labels[i])
    }

    /// Look up a color by its label, case-insensitively
    #[must_use]
    pub fn color_of(&self, label: char) -> Option<Color> {
        let label = label.to_ascii_uppercase();
        self.labels
            .iter()
            .position(|l| l.to_ascii_uppercase() == label)
            .map(|i| self.colors[i])
    }

    /// Parse a label string like "RGBY" into a code
    ///
    /// Lookup is case-insensitive. The code's length is the string's
    /// length; whether that matches the secret is the evaluator's concern.
    ///
    /// # Errors
    /// Returns `PaletteError::UnknownLabel` for any character that names
    /// no palette color.
    pub fn code_from_labels(&self, labels: &str) -> Result<Code, PaletteError> {
        labels
            .chars()
            .map(|label| self.color_of(label).ok_or(PaletteError::UnknownLabel(label)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_creation_valid() {
        let palette = Palette::new(
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
            vec!['R', 'B'],
        )
        .unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.labels(), &['R', 'B']);
    }

    #[test]
    fn palette_rejects_mismatched_lengths() {
        let result = Palette::new(vec![Color::rgb(255, 0, 0)], vec!['R', 'B']);
        assert_eq!(
            result,
            Err(PaletteError::LabelCountMismatch {
                colors: 1,
                labels: 2
            })
        );
    }

    #[test]
    fn palette_rejects_empty() {
        assert_eq!(Palette::new(vec![], vec![]), Err(PaletteError::Empty));
    }

    #[test]
    fn palette_rejects_duplicate_color() {
        let red = Color::rgb(255, 0, 0);
        let result = Palette::new(vec![red, red], vec!['R', 'S']);
        assert_eq!(result, Err(PaletteError::DuplicateColor(red)));
    }

    #[test]
    fn palette_rejects_duplicate_label() {
        let result = Palette::new(
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
            vec!['R', 'R'],
        );
        assert_eq!(result, Err(PaletteError::DuplicateLabel('R')));
    }

    #[test]
    fn classic_palette_size() {
        let palette = Palette::classic();
        assert_eq!(palette.len(), CLASSIC_SIZE);
        assert_eq!(palette.labels(), &['R', 'G', 'B', 'Y', 'O', 'P']);
    }

    #[test]
    fn classic_with_valid_sizes() {
        for count in 2..=8 {
            let palette = Palette::classic_with(count).unwrap();
            assert_eq!(palette.len(), count);
        }
    }

    #[test]
    fn classic_with_invalid_sizes() {
        assert_eq!(
            Palette::classic_with(0),
            Err(PaletteError::UnsupportedSize(0))
        );
        assert_eq!(
            Palette::classic_with(1),
            Err(PaletteError::UnsupportedSize(1))
        );
        assert_eq!(
            Palette::classic_with(9),
            Err(PaletteError::UnsupportedSize(9))
        );
    }

    #[test]
    fn label_lookup_round_trip() {
        let palette = Palette::classic();

        for (&color, &label) in palette.colors().iter().zip(palette.labels()) {
            assert_eq!(palette.label_of(color), Some(label));
            assert_eq!(palette.color_of(label), Some(color));
        }
    }

    #[test]
    fn label_of_unknown_color() {
        let palette = Palette::classic();
        assert_eq!(palette.label_of(Color::rgb(1, 1, 1)), None);
    }

    #[test]
    fn color_of_is_case_insensitive() {
        let palette = Palette::classic();
        assert_eq!(palette.color_of('r'), palette.color_of('R'));
        assert!(palette.color_of('r').is_some());
    }

    #[test]
    fn code_from_labels_valid() {
        let palette = Palette::classic();
        let code = palette.code_from_labels("RGby").unwrap();

        assert_eq!(code.len(), 4);
        assert_eq!(code.color_at(0), palette.color_of('R').unwrap());
        assert_eq!(code.color_at(3), palette.color_of('Y').unwrap());
    }

    #[test]
    fn code_from_labels_unknown() {
        let palette = Palette::classic();
        assert_eq!(
            palette.code_from_labels("RGX"),
            Err(PaletteError::UnknownLabel('X'))
        );
    }

    #[test]
    fn code_from_labels_empty() {
        let palette = Palette::classic();
        let code = palette.code_from_labels("").unwrap();
        assert!(code.is_empty());
    }
}
