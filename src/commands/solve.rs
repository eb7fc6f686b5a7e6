//! Code solving command
//!
//! Plays the computer against a known secret and records the solution path.

use crate::config::GameConfig;
use crate::core::{Code, Feedback, PoolState, Result};
use crate::solver::Strategy;
use crate::solver::minimax::calculate_max_remaining;

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Code,
    pub outcome: PoolState,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    /// Whether the secret was guessed
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == PoolState::Solved
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst-case candidates this guess could have left
    pub worst_case: usize,
}

/// Solve `secret` using the given strategy
///
/// The pool is limited to `config.max_attempts` guesses. The outcome is
/// `Solved` when a guess matches the secret, `Abandoned` when the budget runs
/// out, and `Exhausted` if the feedback history became contradictory (which
/// truthful scoring never produces).
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not have the configured length
/// - The strategy cannot provide a guess
pub fn solve_code<S: Strategy + ?Sized>(
    config: &GameConfig,
    secret: &Code,
    strategy: &S,
) -> Result<SolveResult> {
    let mut pool = config.new_pool()?;
    let mut steps = Vec::new();

    let outcome = loop {
        let candidates_before = pool.candidates().len();
        let guess = pool.next_guess(strategy)?;
        let worst_case = calculate_max_remaining(&guess, pool.candidates().as_slice());

        let feedback = Feedback::score(secret, &guess)?;
        let state = pool.record_observation(guess.clone(), feedback)?;

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: pool.candidates().len(),
            worst_case,
        });

        if feedback.is_perfect(config.length) {
            break PoolState::Solved;
        }
        if matches!(state, PoolState::Exhausted | PoolState::Abandoned) {
            break state;
        }
    };

    Ok(SolveResult {
        secret: secret.clone(),
        outcome,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, CodebreakerError};
    use crate::solver::{EntropyStrategy, MinimaxStrategy, NaiveStrategy, RandomStrategy};

    fn secret(text: &str) -> Code {
        Code::parse(text, &Alphabet::default(), 4).unwrap()
    }

    #[test]
    fn minimax_solves_known_codes() {
        let config = GameConfig::default();
        for (text, guesses) in [("GRBY", 4), ("PPPP", 3), ("OYOY", 6), ("GGRR", 1)] {
            let result = solve_code(&config, &secret(text), &MinimaxStrategy).unwrap();

            assert!(result.success());
            assert_eq!(result.steps.len(), guesses, "{text}");
            assert_eq!(result.steps.last().unwrap().guess, secret(text));
        }
    }

    #[test]
    fn every_strategy_converges() {
        let config = GameConfig::default();
        let target = secret("YOPB");

        let naive = solve_code(&config, &target, &NaiveStrategy).unwrap();
        let random = solve_code(&config, &target, &RandomStrategy).unwrap();
        let entropy = solve_code(&config, &target, &EntropyStrategy).unwrap();

        for result in [naive, random, entropy] {
            assert!(result.success());
            assert!(result.steps.len() <= config.max_attempts);
        }
    }

    #[test]
    fn steps_record_shrinking_candidates() {
        let result = solve_code(&GameConfig::default(), &secret("RBOG"), &MinimaxStrategy).unwrap();

        assert_eq!(result.steps[0].candidates_before, 1296);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after <= step.worst_case);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn first_guess_is_knuth_opening() {
        let result = solve_code(&GameConfig::default(), &secret("OOOO"), &MinimaxStrategy).unwrap();
        assert_eq!(result.steps[0].guess.to_string(), "GGRR");
        assert_eq!(result.steps[0].worst_case, 256);
    }

    #[test]
    fn tight_budget_abandons() {
        let config = GameConfig::new(Alphabet::default(), 4, 1).unwrap();
        let result = solve_code(&config, &secret("PPPP"), &NaiveStrategy).unwrap();

        assert_eq!(result.outcome, PoolState::Abandoned);
        assert!(!result.success());
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn wrong_length_secret_is_an_error() {
        let short = Code::parse("GRB", &Alphabet::default(), 3).unwrap();
        let result = solve_code(&GameConfig::default(), &short, &NaiveStrategy);

        assert!(matches!(result, Err(CodebreakerError::InvalidLength { .. })));
    }
}
