//! Shannon entropy calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedbacks the guess can produce
    pub partitions: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::solver::entropy::calculate_entropy;
///
/// let alphabet = Alphabet::default();
/// let guess = Code::parse("GRBY", &alphabet, 4).unwrap();
/// let candidates = vec![
///     Code::parse("GRBY", &alphabet, 4).unwrap(),
///     Code::parse("OOPP", &alphabet, 4).unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely outcomes
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
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

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// Counts are summed in sorted order, so two distributions with the same
/// partition sizes give bit-identical results regardless of hash order.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n distinct feedbacks
#[must_use]
pub fn shannon_entropy<S>(feedback_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut counts: Vec<usize> = feedback_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, max partition size and
/// the number of distinct feedbacks.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let groups = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p × size, with p = size / total
    let expected_remaining: f64 = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().max().copied().unwrap_or(0),
        partitions: groups.len(),
    }
}
