//! Game configuration
//!
//! Alphabet, code length and attempt budget for one session, validated once
//! up front so the game loops can rely on them.

use crate::core::{Alphabet, Code, CodebreakerError, Feedback, Result};
use crate::solver::{CandidatePool, universe_size};

/// Positions in a code when none are specified
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Guesses allowed per game when no budget is specified
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Parameters shared by every game mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub alphabet: Alphabet,
    pub length: usize,
    pub max_attempts: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidParameters` if the candidate universe cannot be built
    /// for `alphabet` and `length`, or if `max_attempts` is zero.
    pub fn new(alphabet: Alphabet, length: usize, max_attempts: usize) -> Result<Self> {
        universe_size(&alphabet, length)?;
        if max_attempts == 0 {
            return Err(CodebreakerError::InvalidParameters(
                "at least one attempt is required".to_string(),
            ));
        }

        Ok(Self {
            alphabet,
            length,
            max_attempts,
        })
    }

    /// Create a configuration from command-line text
    ///
    /// # Errors
    /// Same as [`Alphabet::parse`] and [`GameConfig::new`].
    pub fn from_args(alphabet: &str, length: usize, max_attempts: usize) -> Result<Self> {
        Self::new(Alphabet::parse(alphabet)?, length, max_attempts)
    }

    /// Parse a code for this game
    ///
    /// # Errors
    /// Returns `InvalidLength` or `InvalidSymbol` for malformed input.
    pub fn parse_code(&self, text: &str) -> Result<Code> {
        Code::parse(text, &self.alphabet, self.length)
    }

    /// Parse peg feedback for this game
    ///
    /// # Errors
    /// Returns `InvalidFeedback` for malformed input.
    pub fn parse_feedback(&self, text: &str) -> Result<Feedback> {
        Feedback::parse(text, self.length)
    }

    /// Feedback awarded for a fully correct guess
    #[must_use]
    pub const fn perfect(&self) -> Feedback {
        Feedback::perfect(self.length)
    }

    /// A fresh, initialized pool limited to `max_attempts` observations
    ///
    /// # Errors
    /// Returns `InvalidParameters` if the universe cannot be built.
    pub fn new_pool(&self) -> Result<CandidatePool> {
        let mut pool = CandidatePool::new().with_attempt_budget(self.max_attempts);
        pool.initialize(&self.alphabet, self.length)?;
        Ok(pool)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
