//! Formatting utilities for terminal output

use crate::core::{Code, Palette, Score};
use colored::Colorize;

/// Format a score as a pin row: blacks, then whites, then neutral pins
///
/// # Examples
/// ```
/// use mastermind::core::Score;
/// use mastermind::output::score_pins;
///
/// assert_eq!(score_pins(Score::new(1, 2), 4), "●○○·");
/// assert_eq!(score_pins(Score::new(0, 0), 4), "····");
/// ```
#[must_use]
pub fn score_pins(score: Score, length: usize) -> String {
    let scored = score.blacks() + score.whites();

    let mut pins = String::with_capacity(length * 3);
    pins.push_str(&"●".repeat(score.blacks()));
    pins.push_str(&"○".repeat(score.whites()));
    pins.push_str(&"·".repeat(length.saturating_sub(scored)));
    pins
}

/// Format a code as its labels, each tinted with its peg color
///
/// Colors outside the palette render as '?'.
#[must_use]
pub fn colored_pegs(code: &Code, palette: &Palette) -> String {
    let pegs: Vec<String> = code
        .colors()
        .iter()
        .map(|&color| {
            let label = palette.label_of(color).unwrap_or('?');
            label
                .to_string()
                .truecolor(color.r, color.g, color.b)
                .bold()
                .to_string()
        })
        .collect();

    pegs.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color};

    #[test]
    fn pins_blacks_before_whites() {
        assert_eq!(score_pins(Score::new(1, 1), 4), "●○··");
        assert_eq!(score_pins(Score::new(2, 2), 4), "●●○○");
    }

    #[test]
    fn pins_all_neutral_for_zero_score() {
        assert_eq!(score_pins(Score::new(0, 0), 5), "·····");
    }

    #[test]
    fn pins_full_win() {
        assert_eq!(score_pins(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn colored_pegs_uses_palette_labels() {
        colored::control::set_override(false);

        let palette = Palette::classic();
        let code = palette.code_from_labels("RGB").unwrap();

        assert_eq!(colored_pegs(&code, &palette), "R G B");
    }

    #[test]
    fn colored_pegs_marks_foreign_colors() {
        colored::control::set_override(false);

        let palette = Palette::classic();
        let code = Code::new(vec![Color::rgb(9, 9, 9)]);

        assert_eq!(colored_pegs(&code, &palette), "?");
    }
}
