//! Benchmark command
//!
//! Runs the solver against many secrets and aggregates guess counts.

use super::solve::solve_code;
use crate::config::GameConfig;
use crate::core::{Code, PoolState, Result};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    /// Secrets not found within the attempt budget
    pub failures: Vec<Code>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved secrets
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run benchmark on a set of secrets
///
/// Averages and the distribution only count solved secrets. A progress bar
/// is drawn on stderr when `show_progress` is set.
///
/// # Errors
///
/// Returns an error if a secret does not fit the configuration.
pub fn run_benchmark<S: Strategy + ?Sized>(
    config: &GameConfig,
    strategy: &S,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let progress = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let result = solve_code(config, secret, strategy)?;
        let guesses = result.steps.len();

        if result.outcome == PoolState::Solved {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            debug!(secret = %secret, outcome = %result.outcome, "secret not solved");
            failures.push(secret.clone());
        }

        progress.set_message(format!("{secret} in {guesses}"));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_codes = secrets.len();

    Ok(BenchmarkResult {
        total_codes,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::{MinimaxStrategy, NaiveStrategy, initialize};

    fn first_secrets(count: usize) -> Vec<Code> {
        initialize(&Alphabet::default(), 4)
            .unwrap()
            .iter()
            .take(count)
            .cloned()
            .collect()
    }

    #[test]
    fn benchmark_runs() {
        let secrets = first_secrets(10);
        let result = run_benchmark(&GameConfig::default(), &MinimaxStrategy, &secrets, false).unwrap();

        // GGGG..GGRY solve in 4 3 3 3 4 5 3 1 2 4
        assert_eq!(result.total_codes, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert_eq!(result.total_guesses, 32);
        assert!((result.average_guesses - 3.2).abs() < 1e-9);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 5);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let secrets = first_secrets(20);
        let result = run_benchmark(&GameConfig::default(), &MinimaxStrategy, &secrets, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_records_failures() {
        let config = GameConfig::new(Alphabet::default(), 4, 2).unwrap();
        let secrets = first_secrets(3);
        let result = run_benchmark(&config, &NaiveStrategy, &secrets, false).unwrap();

        // Naive guesses GGGG first, which only finds the first secret
        assert_eq!(result.solved + result.failures.len(), 3);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert!(result.max_guesses <= 2);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let result = run_benchmark(&GameConfig::default(), &MinimaxStrategy, &[], false).unwrap();

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
