//! Error type shared by the scorer and the candidate pool

use super::PoolState;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CodebreakerError>;

/// Everything that can go wrong inside the codebreaker core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodebreakerError {
    /// Two codes (or a code and the configured length) disagree in length
    #[error("code length mismatch: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Alphabet or length cannot describe a playable game
    #[error("invalid game parameters: {0}")]
    InvalidParameters(String),

    /// A character outside the alphabet was supplied
    #[error("symbol '{symbol}' is not in the alphabet {alphabet}")]
    InvalidSymbol { symbol: char, alphabet: String },

    /// Feedback text could not be parsed or exceeds the code length
    #[error("invalid feedback '{text}': {reason}")]
    InvalidFeedback { text: String, reason: String },

    /// A guess was requested but no candidates remain
    #[error("no candidates remain")]
    EmptyCandidateSet,

    /// The observation history admits no secret at all
    #[error("feedback history is contradictory after {observations} observations")]
    Contradiction { observations: usize },

    /// The pool has not been initialized yet
    #[error("candidate pool is not initialized")]
    Uninitialized,

    /// The session already ended and accepts no more observations
    #[error("session already ended ({0})")]
    SessionClosed(PoolState),
}
