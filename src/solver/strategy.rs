//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// First candidate in generation order
    Naive(NaiveStrategy),
    /// Uniform pick among remaining candidates
    Random(RandomStrategy),
    /// Knuth-style worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// Expected information maximization
    Entropy(EntropyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::Naive(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Entropy(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 4] = ["naive", "random", "minimax", "entropy"];

    /// Create strategy from name string
    ///
    /// Supported names: "naive" (or "first"), "random", "minimax" (or
    /// "knuth"), "entropy". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "naive" | "first" => Some(Self::Naive(NaiveStrategy)),
            "random" => Some(Self::Random(RandomStrategy)),
            "minimax" | "knuth" => Some(Self::Minimax(MinimaxStrategy)),
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            _ => None,
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive(_) => "naive",
            Self::Random(_) => "random",
            Self::Minimax(_) => "minimax",
            Self::Entropy(_) => "entropy",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Naive strategy
///
/// Always guesses the first remaining candidate. Cheapest and weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaiveStrategy;

impl Strategy for NaiveStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}

/// Pure minimax strategy
///
/// Selects the candidate that minimizes the worst-case number of remaining
/// candidates. Ties go to the earliest candidate in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        if candidates.len() <= 2 {
            // Any candidate splits one or two codes as well as possible
            return candidates.first();
        }
        super::minimax::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

/// Pure entropy maximization strategy
///
/// Selects the candidate whose feedback distribution carries the most
/// information. Ties go to the earliest candidate in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        if candidates.len() <= 2 {
            return candidates.first();
        }
        super::entropy::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}
