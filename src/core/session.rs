//! Per-session records: observations and the pool lifecycle

use super::{Code, Feedback, Result};
use std::fmt;

/// One round of play: the guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    guess: Code,
    feedback: Feedback,
}

impl Observation {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Check whether `candidate` could be the secret given this observation
    ///
    /// # Errors
    /// Returns `InvalidLength` if `candidate` and the guess differ in length.
    pub fn admits(&self, candidate: &Code) -> Result<bool> {
        Ok(Feedback::score(candidate, &self.guess)? == self.feedback)
    }
}

/// Lifecycle of a candidate pool over one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// No candidate universe built yet
    Uninitialized,
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Solved,
    /// No candidate survives the feedback history
    Exhausted,
    /// The attempt budget ran out first
    Abandoned,
}

impl PoolState {
    /// Whether the session has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Abandoned)
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Abandoned => "abandoned",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    #[test]
    fn observation_admits_consistent_candidates() {
        let alphabet = Alphabet::default();
        let guess = Code::parse("GRBY", &alphabet, 4).unwrap();
        let secret = Code::parse("GBRY", &alphabet, 4).unwrap();
        let other = Code::parse("OOOO", &alphabet, 4).unwrap();

        let observation = Observation::new(guess.clone(), Feedback::score(&secret, &guess).unwrap());

        assert!(observation.admits(&secret).unwrap());
        assert!(!observation.admits(&other).unwrap());
        assert_eq!(observation.guess(), &guess);
    }

    #[test]
    fn terminal_states() {
        assert!(!PoolState::Uninitialized.is_terminal());
        assert!(!PoolState::Active.is_terminal());
        assert!(PoolState::Solved.is_terminal());
        assert!(PoolState::Exhausted.is_terminal());
        assert!(PoolState::Abandoned.is_terminal());
    }
}
