//! Minimax worst-case calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::solver::minimax::calculate_max_remaining;
///
/// let alphabet = Alphabet::default();
/// let guess = Code::parse("GGRR", &alphabet, 4).unwrap();
/// let candidates = vec![
///     Code::parse("GRBY", &alphabet, 4).unwrap(),
///     Code::parse("OOPP", &alphabet, 4).unwrap(),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Sizes of the feedback partitions, largest first
///
/// Each entry pairs a feedback with the number of candidates that would
/// produce it; ties are ordered by feedback (more exact pegs first).
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code]) -> Vec<(Feedback, usize)> {
    let mut sizes: Vec<(Feedback, usize)> = group_by_feedback(guess, candidates)
        .into_iter()
        .collect();
    sizes.sort_by(|(f1, n1), (f2, n2)| {
        n2.cmp(n1)
            .then(f2.exact().cmp(&f1.exact()))
            .then(f2.partial().cmp(&f1.partial()))
    });
    sizes
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::between(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
