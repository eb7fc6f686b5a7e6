//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the code that
/// appears first in `guess_pool`, so parallel scoring never changes the
/// answer.
///
/// # Examples
/// ```
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::solver::minimax::select_best_guess;
///
/// let alphabet = Alphabet::default();
/// let parse = |t: &str| Code::parse(t, &alphabet, 4).unwrap();
/// let guesses = vec![parse("PPPP"), parse("GGRR")];
/// let candidates = vec![parse("GGGG"), parse("RRRR"), parse("GRGR")];
///
/// let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.to_string(), "GGRR");
/// assert!(max_remaining < 3);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (index, guess, max_remaining)
        })
        .min_by_key(|&(index, _, max)| (max, index))
        .map(|(_, guess, max)| (guess, max))
}
