//! Feedback scoring and its textual peg encoding
//!
//! Feedback summarizes a guess against a secret as two counts:
//! - exact: same symbol in the same position (black peg, `b`)
//! - partial: symbol present elsewhere (white peg, `w`)
//!
//! Each physical peg on either side is consumed at most once, so repeated
//! symbols are never double-counted.

use super::{Code, CodebreakerError, MAX_CODE_LENGTH, Result};
use std::fmt;

/// Marker for an exact match in the canonical text form
pub const EXACT_MARKER: char = 'b';

/// Marker for a colour-only match in the canonical text form
pub const PARTIAL_MARKER: char = 'w';

/// Black/white peg counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a guess that equals the secret
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of colour-only matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Total pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact as usize + self.partial as usize
    }

    /// Check whether every position matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: equal symbols at equal positions are counted and both
    ///    pegs are marked consumed
    /// 2. Partial pass: each unconsumed secret peg takes the first unconsumed
    ///    guess peg of the same symbol, in index order
    ///
    /// The result is symmetric: swapping `secret` and `guess` gives the same
    /// feedback.
    ///
    /// # Errors
    /// Returns `InvalidLength` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Alphabet, Code, Feedback};
    ///
    /// let alphabet = Alphabet::default();
    /// let secret = Code::parse("GRBY", &alphabet, 4).unwrap();
    /// let guess = Code::parse("GBRY", &alphabet, 4).unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    /// assert_eq!(feedback, Feedback::new(2, 2));
    /// assert_eq!(feedback.to_string(), "bbww");
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self> {
        let length = secret.len();
        if guess.len() != length {
            return Err(CodebreakerError::InvalidLength {
                expected: length,
                actual: guess.len(),
            });
        }

        Ok(Self::between(secret, guess))
    }

    /// Score two codes already known to share a length
    ///
    /// Used on the hot paths of filtering and guess selection, where every
    /// code comes from the same candidate universe.
    pub(crate) fn between(secret: &Code, guess: &Code) -> Self {
        let secret = secret.symbols();
        let guess = guess.symbols();
        let mut secret_used = [false; MAX_CODE_LENGTH];
        let mut guess_used = [false; MAX_CODE_LENGTH];
        let mut exact = 0u8;
        let mut partial = 0u8;

        // First pass: exact matches
        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        // Second pass: colour-only matches among the leftovers
        for (i, s) in secret.iter().enumerate() {
            if secret_used[i] {
                continue;
            }
            if let Some(j) = (0..guess.len()).find(|&j| !guess_used[j] && guess[j] == *s) {
                guess_used[j] = true;
                partial += 1;
            }
        }

        Self { exact, partial }
    }

    /// Parse peg text such as `"bbw"`
    ///
    /// Accepts `b`/`B` for exact and `w`/`W` for partial matches in any order.
    /// An empty string means no pegs at all.
    ///
    /// # Errors
    /// Returns `InvalidFeedback` for any other character, when more pegs
    /// are given than the code has positions, or when `length` exceeds
    /// [`MAX_CODE_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("bbw", 4).unwrap(), Feedback::new(2, 1));
    /// assert_eq!(Feedback::parse("", 4).unwrap(), Feedback::new(0, 0));
    /// assert!(Feedback::parse("bbbbb", 4).is_err());
    /// ```
    pub fn parse(text: &str, length: usize) -> Result<Self> {
        if length > MAX_CODE_LENGTH {
            return Err(CodebreakerError::InvalidFeedback {
                text: text.to_string(),
                reason: format!("codes are at most {MAX_CODE_LENGTH} pegs long, not {length}"),
            });
        }

        let mut exact = 0usize;
        let mut partial = 0usize;

        for ch in text.trim().chars() {
            match ch.to_ascii_lowercase() {
                EXACT_MARKER => exact += 1,
                PARTIAL_MARKER => partial += 1,
                other => {
                    return Err(CodebreakerError::InvalidFeedback {
                        text: text.to_string(),
                        reason: format!(
                            "unexpected '{other}', use '{EXACT_MARKER}' and '{PARTIAL_MARKER}'"
                        ),
                    });
                }
            }
        }

        if exact + partial > length {
            return Err(CodebreakerError::InvalidFeedback {
                text: text.to_string(),
                reason: format!("{} pegs for a code of length {length}", exact + partial),
            });
        }

        Ok(Self::new(exact as u8, partial as u8))
    }

    /// Canonical peg string: all exact markers, then all partial markers
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut pegs = String::with_capacity(self.total());
        pegs.extend(std::iter::repeat_n(EXACT_MARKER, self.exact as usize));
        pegs.extend(std::iter::repeat_n(PARTIAL_MARKER, self.partial as usize));
        pegs
    }
}

/// Score `guess` against `secret`; see [`Feedback::score`]
///
/// # Errors
/// Returns `InvalidLength` if the codes differ in length.
pub fn score(secret: &Code, guess: &Code) -> Result<Feedback> {
    Feedback::score(secret, guess)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pegs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn code(text: &str) -> Code {
        Code::parse(text, &Alphabet::default(), text.len()).unwrap()
    }

    #[test]
    fn identical_codes_are_perfect() {
        for text in ["GRBY", "GGGG", "OPOP", "PYBR"] {
            let c = code(text);
            let feedback = score(&c, &c).unwrap();
            assert_eq!(feedback, Feedback::perfect(4));
            assert!(feedback.is_perfect(4));
        }
    }

    #[test]
    fn no_common_symbols() {
        let feedback = score(&code("GGRR"), &code("BBYY")).unwrap();
        assert_eq!(feedback, Feedback::new(0, 0));
        assert_eq!(feedback.to_string(), "");
    }

    #[test]
    fn swapped_pair() {
        // G and Y in place, R and B swapped
        let feedback = score(&code("GRBY"), &code("GBRY")).unwrap();
        assert_eq!(feedback.exact(), 2);
        assert_eq!(feedback.partial(), 2);
    }

    #[test]
    fn repeated_symbols_not_double_counted() {
        // Only position 2 matches exactly; one G and one R pair up elsewhere
        let feedback = score(&code("GGRR"), &code("RRRG")).unwrap();
        assert_eq!(feedback, Feedback::new(1, 2));

        // Three exact matches consume every R; the leftover G finds nothing
        let feedback = score(&code("GGRR"), &code("GRRR")).unwrap();
        assert_eq!(feedback, Feedback::new(3, 0));
    }

    #[test]
    fn duplicate_in_guess_only() {
        // Secret has a single G; guess repeats it three times
        let feedback = score(&code("GRBY"), &code("OGGG")).unwrap();
        assert_eq!(feedback, Feedback::new(0, 1));
    }

    #[test]
    fn exact_takes_priority_over_partial() {
        let feedback = score(&code("GRRB"), &code("RRGG")).unwrap();
        // Position 1 exact; G and R each pair once more
        assert_eq!(feedback, Feedback::new(1, 2));
    }

    #[test]
    fn symmetric_under_swap() {
        let pairs = [("GGRR", "RRRG"), ("GRBY", "YYYG"), ("OPPO", "POOP")];
        for (a, b) in pairs {
            assert_eq!(
                score(&code(a), &code(b)).unwrap(),
                score(&code(b), &code(a)).unwrap()
            );
        }
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let result = score(&code("GRBY"), &code("GRB"));
        assert!(matches!(
            result,
            Err(CodebreakerError::InvalidLength {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn pegs_are_canonical() {
        assert_eq!(Feedback::new(2, 1).to_pegs(), "bbw");
        assert_eq!(Feedback::new(0, 3).to_pegs(), "www");
        assert_eq!(Feedback::perfect(4).to_string(), "bbbb");
    }

    #[test]
    fn parse_any_order_and_case() {
        assert_eq!(Feedback::parse("wBb", 4).unwrap(), Feedback::new(2, 1));
        assert_eq!(Feedback::parse(" WW ", 4).unwrap(), Feedback::new(0, 2));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Feedback::parse("bx", 4),
            Err(CodebreakerError::InvalidFeedback { .. })
        ));
        assert!(matches!(
            Feedback::parse("bbwww", 4),
            Err(CodebreakerError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn parse_round_trips_canonical_text() {
        let feedback = Feedback::new(1, 2);
        assert_eq!(Feedback::parse(&feedback.to_pegs(), 4).unwrap(), feedback);
    }

    #[test]
    fn parse_rejects_lengths_beyond_the_scorer() {
        let pegs = "b".repeat(300);
        assert!(matches!(
            Feedback::parse(&pegs, 300),
            Err(CodebreakerError::InvalidFeedback { .. })
        ));
        assert!(Feedback::parse("", MAX_CODE_LENGTH + 1).is_err());
        assert_eq!(
            Feedback::parse(&"b".repeat(MAX_CODE_LENGTH), MAX_CODE_LENGTH).unwrap(),
            Feedback::perfect(MAX_CODE_LENGTH)
        );
    }
}
