//! Guess evaluation against the hidden secret
//!
//! The evaluator owns the secret for one game session. It hands out
//! match counts, never the secret itself; the only way to see the secret
//! is the end-of-game label reveal.

use super::secret::{SecretSource, UniformRandom};
use crate::core::{Code, Color, Palette, Score};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for evaluator construction and evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Requested code length was zero
    ZeroLength,
    /// A guess whose length differs from the secret's
    GuessLength { expected: usize, got: usize },
    /// A secret peg with no palette label (only reachable through a
    /// custom source that bypasses the palette)
    UnknownSecretColor(Color),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::GuessLength { expected, got } => {
                write!(f, "Guess must have {expected} pegs, got {got}")
            }
            Self::UnknownSecretColor(color) => {
                write!(f, "Secret color {color} is not in the palette")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Guess evaluator and secret holder for one game session
///
/// Generic over the secret generation strategy; `UniformRandom` is the
/// default for real games, `FixedSecret` the substitute for tests.
///
/// # Examples
/// ```
/// use mastermind::core::{Palette, Score};
/// use mastermind::game::{Evaluator, FixedSecret};
///
/// let palette = Palette::classic();
/// let secret = palette.code_from_labels("RGBY").unwrap();
/// let evaluator = Evaluator::new(palette, 4, FixedSecret::new(secret)).unwrap();
///
/// let guess = evaluator.palette().code_from_labels("RBGO").unwrap();
/// assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(1, 2));
/// assert_eq!(evaluator.show_secret().unwrap(), "RGBY");
/// ```
pub struct Evaluator<S: SecretSource> {
    palette: Palette,
    secret: Code,
    source: S,
}

impl Evaluator<UniformRandom> {
    /// Create an evaluator with the default uniform random source
    ///
    /// # Errors
    /// Returns `EvalError::ZeroLength` if `length` is zero.
    pub fn with_random(palette: Palette, length: usize) -> Result<Self, EvalError> {
        Self::new(palette, length, UniformRandom::new())
    }
}

impl<S: SecretSource> Evaluator<S> {
    /// Create an evaluator and draw the initial secret
    ///
    /// # Errors
    /// Returns `EvalError::ZeroLength` if `length` is zero.
    pub fn new(palette: Palette, length: usize, mut source: S) -> Result<Self, EvalError> {
        if length == 0 {
            return Err(EvalError::ZeroLength);
        }

        let secret = source.draw(&palette, length);
        log::debug!("drew initial secret of {} pegs", secret.len());

        Ok(Self {
            palette,
            secret,
            source,
        })
    }

    /// Regenerate the secret for a new game on the same instance
    ///
    /// # Errors
    /// Returns `EvalError::ZeroLength` if `length` is zero.
    pub fn init(&mut self, length: usize) -> Result<(), EvalError> {
        if length == 0 {
            return Err(EvalError::ZeroLength);
        }

        self.secret = self.source.draw(&self.palette, length);
        log::debug!("redrew secret of {} pegs", self.secret.len());
        Ok(())
    }

    /// The palette this evaluator draws from
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Length of the current secret
    #[inline]
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }

    /// Score a guess against the secret
    ///
    /// Standard two-pass Mastermind scoring:
    /// 1. Exact pass: count position-and-color matches (blacks); those
    ///    pegs are consumed and excluded from the second pass.
    /// 2. Partial pass: per color, the unconsumed guess pegs match the
    ///    unconsumed secret pegs up to the smaller count (whites).
    ///
    /// The two passes keep duplicated guess colors from over-counting:
    /// secret R-B against guess R-R scores one black and zero whites,
    /// because the secret's only red is consumed by the exact match.
    ///
    /// # Errors
    /// Returns `EvalError::GuessLength` if the guess length differs from
    /// the secret's.
    pub fn check_guess(&self, guess: &Code) -> Result<Score, EvalError> {
        if guess.len() != self.secret.len() {
            return Err(EvalError::GuessLength {
                expected: self.secret.len(),
                got: guess.len(),
            });
        }

        let mut blacks = 0;
        let mut secret_left: FxHashMap<Color, usize> = FxHashMap::default();
        let mut guess_left: FxHashMap<Color, usize> = FxHashMap::default();

        for (&secret_peg, &guess_peg) in self.secret.colors().iter().zip(guess.colors()) {
            if secret_peg == guess_peg {
                blacks += 1;
            } else {
                *secret_left.entry(secret_peg).or_insert(0) += 1;
                *guess_left.entry(guess_peg).or_insert(0) += 1;
            }
        }

        let whites = guess_left
            .iter()
            .map(|(color, &count)| count.min(secret_left.get(color).copied().unwrap_or(0)))
            .sum();

        Ok(Score::new(blacks, whites))
    }

    /// Reveal the secret as its palette labels, concatenated in order
    ///
    /// # Errors
    /// Returns `EvalError::UnknownSecretColor` if a secret peg has no
    /// palette label.
    pub fn show_secret(&self) -> Result<String, EvalError> {
        self.secret
            .colors()
            .iter()
            .map(|&color| {
                self.palette
                    .label_of(color)
                    .ok_or(EvalError::UnknownSecretColor(color))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::secret::FixedSecret;

    fn fixed_evaluator(labels: &str) -> Evaluator<FixedSecret> {
        let palette = Palette::classic();
        let secret = palette.code_from_labels(labels).unwrap();
        Evaluator::new(palette, labels.len(), FixedSecret::new(secret)).unwrap()
    }

    #[test]
    fn random_secret_has_requested_length() {
        let evaluator = Evaluator::with_random(Palette::classic(), 4).unwrap();

        assert_eq!(evaluator.code_length(), 4);
        assert_eq!(evaluator.show_secret().unwrap().len(), 4);
    }

    #[test]
    fn zero_length_is_rejected() {
        let result = Evaluator::with_random(Palette::classic(), 0);
        assert!(matches!(result, Err(EvalError::ZeroLength)));
    }

    #[test]
    fn show_secret_translates_labels() {
        let evaluator = fixed_evaluator("RG");
        assert_eq!(evaluator.show_secret().unwrap(), "RG");
    }

    #[test]
    fn show_secret_uses_only_palette_labels() {
        let evaluator = Evaluator::with_random(Palette::classic(), 8).unwrap();
        let secret = evaluator.show_secret().unwrap();

        assert_eq!(secret.len(), 8);
        for label in secret.chars() {
            assert!(evaluator.palette().labels().contains(&label));
        }
    }

    #[test]
    fn show_secret_fails_for_foreign_color() {
        let palette = Palette::classic();
        let foreign = Color::rgb(9, 9, 9);
        let evaluator =
            Evaluator::new(palette, 1, FixedSecret::new(Code::new(vec![foreign]))).unwrap();

        assert_eq!(
            evaluator.show_secret(),
            Err(EvalError::UnknownSecretColor(foreign))
        );
    }

    #[test]
    fn all_exact_guess_wins() {
        let evaluator = fixed_evaluator("RRRR");
        let guess = evaluator.palette().code_from_labels("RRRR").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(4, 0));
    }

    #[test]
    fn full_derangement_is_all_whites() {
        let evaluator = fixed_evaluator("RG");
        let guess = evaluator.palette().code_from_labels("GR").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(0, 2));
    }

    #[test]
    fn disjoint_guess_scores_nothing() {
        let evaluator = fixed_evaluator("RR");
        let guess = evaluator.palette().code_from_labels("BB").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(0, 0));
    }

    #[test]
    fn duplicate_guess_color_does_not_over_count() {
        // Secret R-B holds a single red; once the exact match consumes
        // it, the guess's second red must not earn a white.
        let evaluator = fixed_evaluator("RB");
        let guess = evaluator.palette().code_from_labels("RR").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(1, 0));
    }

    #[test]
    fn duplicate_secret_color_does_not_over_count() {
        let evaluator = fixed_evaluator("RR");
        let guess = evaluator.palette().code_from_labels("RB").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(1, 0));
    }

    #[test]
    fn mixed_exact_and_partial() {
        // Secret RGBY vs guess RBGO: R exact; B and G swapped; O absent
        let evaluator = fixed_evaluator("RGBY");
        let guess = evaluator.palette().code_from_labels("RBGO").unwrap();

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(1, 2));
    }

    #[test]
    fn guess_length_mismatch_is_rejected() {
        let evaluator = fixed_evaluator("RGBY");
        let guess = evaluator.palette().code_from_labels("RG").unwrap();

        assert_eq!(
            evaluator.check_guess(&guess),
            Err(EvalError::GuessLength {
                expected: 4,
                got: 2
            })
        );
    }

    #[test]
    fn non_palette_guess_colors_never_match() {
        let evaluator = fixed_evaluator("RG");
        let guess = Code::new(vec![Color::rgb(9, 9, 9), Color::rgb(8, 8, 8)]);

        assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(0, 0));
    }

    #[test]
    fn check_guess_does_not_consume_the_secret() {
        let evaluator = fixed_evaluator("RGBY");
        let guess = evaluator.palette().code_from_labels("RGBY").unwrap();

        for _ in 0..3 {
            assert_eq!(evaluator.check_guess(&guess).unwrap(), Score::new(4, 0));
        }
    }

    #[test]
    fn score_totals_never_exceed_length() {
        let palette = Palette::classic();
        let labels = palette.labels().to_vec();

        // Exhaustive sweep over all length-3 secret/guess pairs
        for a in &labels {
            for b in &labels {
                for c in &labels {
                    let secret: String = [*a, *b, *c].iter().collect();
                    let evaluator = fixed_evaluator(&secret);

                    for x in &labels {
                        for y in &labels {
                            for z in &labels {
                                let guess_labels: String = [*x, *y, *z].iter().collect();
                                let guess = palette.code_from_labels(&guess_labels).unwrap();
                                let score = evaluator.check_guess(&guess).unwrap();

                                assert!(score.blacks() + score.whites() <= 3);
                                if guess_labels == secret {
                                    assert_eq!(score, Score::new(3, 0));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn init_redraws_the_secret() {
        let mut evaluator = Evaluator::with_random(Palette::classic(), 4).unwrap();
        let before = evaluator.show_secret().unwrap();

        // 10 redraws of 4 pegs over 6 colors: all matching the original
        // has probability 6^-40
        let mut changed = false;
        for _ in 0..10 {
            evaluator.init(4).unwrap();
            if evaluator.show_secret().unwrap() != before {
                changed = true;
                break;
            }
        }

        assert!(changed);
    }

    #[test]
    fn init_changes_the_length() {
        let mut evaluator = Evaluator::with_random(Palette::classic(), 4).unwrap();
        evaluator.init(6).unwrap();

        assert_eq!(evaluator.code_length(), 6);
        assert_eq!(evaluator.show_secret().unwrap().len(), 6);
    }

    #[test]
    fn init_rejects_zero_length() {
        let mut evaluator = Evaluator::with_random(Palette::classic(), 4).unwrap();
        assert_eq!(evaluator.init(0), Err(EvalError::ZeroLength));
        // The old secret survives a failed init
        assert_eq!(evaluator.code_length(), 4);
    }
}
