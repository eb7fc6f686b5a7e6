//! Pure entropy-based guess selection
//!
//! Selects codes that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Returns the code with highest entropy and its entropy value, or `None` if
/// the guess pool is empty. Ties go to the code that appears first in
/// `guess_pool`.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, calculate_entropy(guess, candidates)))
        .max_by(|(i1, _, e1), (i2, _, e2)| e1.total_cmp(e2).then(i2.cmp(i1)))
        .map(|(_, guess, entropy)| (guess, entropy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::initialize;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts
            .iter()
            .map(|t| Code::parse(t, &Alphabet::default(), t.len()).unwrap())
            .collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = codes(&["PPPP", "GGRR"]);
        let candidates = codes(&["GGGG", "RRRR", "GGRR", "BBBB"]);

        let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.to_string(), "GGRR");
        assert!((entropy - 1.5).abs() < 1e-9);
    }

    #[test]
    fn ties_resolved_by_pool_order() {
        let guesses = codes(&["BBBB", "YYYY", "OOOO"]);
        let candidates = codes(&["GGGG", "RRRR"]);

        for _ in 0..5 {
            let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
            assert_eq!(best.to_string(), "BBBB");
            assert!(entropy.abs() < 1e-9);
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["GRBY"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn opening_prefers_distinct_symbols() {
        let universe = initialize(&Alphabet::default(), 4).unwrap();
        let (best, entropy) = select_best_guess(universe.as_slice(), universe.as_slice()).unwrap();

        assert_eq!(best.to_string(), "GRBY");
        assert!(entropy > 3.0);
    }
}
