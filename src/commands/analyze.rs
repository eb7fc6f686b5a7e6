//! Guess analysis command
//!
//! Shows how a single guess would split a set of candidates.

use crate::config::GameConfig;
use crate::core::{Code, Feedback, Result};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::minimax::partition_sizes;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    pub metrics: GuessMetrics,
    /// Feedback groups, largest first
    pub partitions: Vec<(Feedback, usize)>,
}

impl AnalysisResult {
    /// Candidates the guess would rule out on average
    #[must_use]
    pub fn expected_eliminated(&self) -> f64 {
        self.total_candidates as f64 - self.metrics.expected_remaining
    }
}

/// Analyze how `code` splits `candidates`
///
/// # Errors
///
/// Returns `InvalidLength` or `InvalidSymbol` if `code` does not parse for
/// the configured game.
pub fn analyze_code(config: &GameConfig, code: &str, candidates: &[Code]) -> Result<AnalysisResult> {
    let code = config.parse_code(code)?;

    Ok(AnalysisResult {
        metrics: calculate_metrics(&code, candidates),
        partitions: partition_sizes(&code, candidates),
        total_candidates: candidates.len(),
        code,
    })
}
