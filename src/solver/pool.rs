//! Candidate pool: the set of secrets still consistent with all feedback
//!
//! The pool owns its candidate set and observation log for one game session
//! and walks the lifecycle `Uninitialized -> Active -> {Solved, Exhausted, Abandoned}`.

use super::strategy::Strategy;
use crate::core::{
    Alphabet, Code, CodebreakerError, Feedback, MAX_CODE_LENGTH, Observation, PoolState, Result,
    check_length,
};
use tracing::{debug, info, warn};

/// Largest candidate universe `initialize` will build
pub const MAX_UNIVERSE_SIZE: usize = 1 << 22;

/// Codes still consistent with every observation, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// An empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self { codes: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First code in generation order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Number of codes of `length` symbols over `alphabet` (K^N)
///
/// # Errors
/// Returns `InvalidParameters` if the alphabet is empty, the length is zero or
/// too long, or the universe would exceed [`MAX_UNIVERSE_SIZE`].
pub fn universe_size(alphabet: &Alphabet, length: usize) -> Result<usize> {
    if alphabet.is_empty() {
        return Err(CodebreakerError::InvalidParameters(
            "alphabet must not be empty".to_string(),
        ));
    }
    check_length(length)?;

    u32::try_from(length)
        .ok()
        .and_then(|exponent| alphabet.len().checked_pow(exponent))
        .filter(|&size| size <= MAX_UNIVERSE_SIZE)
        .ok_or_else(|| {
            CodebreakerError::InvalidParameters(format!(
                "{} symbols over {length} positions exceeds {MAX_UNIVERSE_SIZE} candidates",
                alphabet.len()
            ))
        })
}

/// Build every code of `length` symbols over `alphabet`
///
/// Codes come out in lexicographic order of the alphabet's declared order:
/// the last position varies fastest.
///
/// # Errors
/// Returns `InvalidParameters` for an unusable alphabet/length combination.
///
/// # Examples
/// ```
/// use codebreaker::core::Alphabet;
/// use codebreaker::solver::initialize;
///
/// let candidates = initialize(&Alphabet::default(), 4).unwrap();
/// assert_eq!(candidates.len(), 1296);
/// assert_eq!(candidates.first().unwrap().to_string(), "GGGG");
/// ```
pub fn initialize(alphabet: &Alphabet, length: usize) -> Result<CandidateSet> {
    let size = universe_size(alphabet, length)?;
    let symbols = alphabet.symbols();
    let mut indices = [0usize; MAX_CODE_LENGTH];
    let mut codes = Vec::with_capacity(size);

    'generate: loop {
        codes.push(Code::from_valid(
            indices[..length].iter().map(|&i| symbols[i]).collect(),
        ));

        // Odometer step: bump the last position, carrying leftwards
        for position in (0..length).rev() {
            indices[position] += 1;
            if indices[position] < symbols.len() {
                continue 'generate;
            }
            indices[position] = 0;
        }
        break;
    }

    debug_assert_eq!(codes.len(), size);
    Ok(CandidateSet { codes })
}

/// Keep the candidates that would have produced the observed feedback
///
/// Order is preserved and the input is left untouched, so the result is
/// always a subset of `candidates`.
///
/// # Errors
/// Returns `InvalidLength` if the observation's guess does not match the
/// candidates' length.
pub fn filter(candidates: &CandidateSet, observation: &Observation) -> Result<CandidateSet> {
    let mut codes = Vec::new();
    for candidate in candidates {
        if observation.admits(candidate)? {
            codes.push(candidate.clone());
        }
    }
    Ok(CandidateSet { codes })
}

/// Pick the next guess from `candidates` using `strategy`
///
/// # Errors
/// Returns `EmptyCandidateSet` when no candidates remain.
pub fn select_next_guess<S: Strategy + ?Sized>(
    candidates: &CandidateSet,
    strategy: &S,
) -> Result<Code> {
    strategy
        .select_guess(candidates.as_slice())
        .cloned()
        .ok_or(CodebreakerError::EmptyCandidateSet)
}

/// Candidate pool for one game session
#[derive(Debug, Clone)]
pub struct CandidatePool {
    length: usize,
    candidates: CandidateSet,
    observations: Vec<Observation>,
    state: PoolState,
    attempt_budget: Option<usize>,
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidatePool {
    /// Create an uninitialized pool without an attempt budget
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: 0,
            candidates: CandidateSet::empty(),
            observations: Vec::new(),
            state: PoolState::Uninitialized,
            attempt_budget: None,
        }
    }

    /// Limit the session to `budget` observations
    ///
    /// Once the budget is used up without a perfect guess the pool moves to
    /// [`PoolState::Abandoned`].
    #[must_use]
    pub const fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.attempt_budget = Some(budget);
        self
    }

    /// Build the full candidate universe and start a fresh session
    ///
    /// Any previous candidates and observations are discarded.
    ///
    /// # Errors
    /// Returns `InvalidParameters` for an unusable alphabet/length combination;
    /// the pool is left unchanged in that case.
    pub fn initialize(&mut self, alphabet: &Alphabet, length: usize) -> Result<PoolState> {
        let candidates = initialize(alphabet, length)?;
        info!(
            alphabet = %alphabet,
            length,
            candidates = candidates.len(),
            "candidate pool initialized"
        );

        self.length = length;
        self.candidates = candidates;
        self.observations.clear();
        self.state = PoolState::Active;
        Ok(self.state)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> PoolState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Observations recorded so far, oldest first
    #[inline]
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Code length of this session (0 while uninitialized)
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Attempts still available, if a budget is set
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        self.attempt_budget
            .map(|budget| budget.saturating_sub(self.observations.len()))
    }

    /// The secret, once exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&Code> {
        match self.state {
            PoolState::Solved => self.candidates.first(),
            _ => None,
        }
    }

    /// Propose the next guess
    ///
    /// # Errors
    /// Returns `Uninitialized` before [`CandidatePool::initialize`] and
    /// `EmptyCandidateSet` after a contradiction.
    pub fn next_guess<S: Strategy + ?Sized>(&self, strategy: &S) -> Result<Code> {
        if self.state == PoolState::Uninitialized {
            return Err(CodebreakerError::Uninitialized);
        }
        select_next_guess(&self.candidates, strategy)
    }

    /// Record one round and narrow the candidates
    ///
    /// State after filtering:
    /// - no candidates left: `Exhausted`
    /// - the guess was fully correct: `Solved`
    /// - attempt budget used up: `Abandoned`
    /// - exactly one candidate left: `Solved`
    /// - otherwise `Active`
    ///
    /// A `Solved` pool keeps accepting observations so the final guess can
    /// be played.
    ///
    /// # Errors
    /// - `Uninitialized` before [`CandidatePool::initialize`]
    /// - `Contradiction` once the pool is exhausted
    /// - `SessionClosed` once the pool is abandoned
    /// - `InvalidLength` / `InvalidFeedback` for an observation that does not
    ///   fit the session's code length
    pub fn record_observation(&mut self, guess: Code, feedback: Feedback) -> Result<PoolState> {
        match self.state {
            PoolState::Uninitialized => return Err(CodebreakerError::Uninitialized),
            PoolState::Exhausted => {
                return Err(CodebreakerError::Contradiction {
                    observations: self.observations.len(),
                });
            }
            PoolState::Abandoned => return Err(CodebreakerError::SessionClosed(self.state)),
            PoolState::Active | PoolState::Solved => {}
        }

        if guess.len() != self.length {
            return Err(CodebreakerError::InvalidLength {
                expected: self.length,
                actual: guess.len(),
            });
        }
        if feedback.total() > self.length {
            return Err(CodebreakerError::InvalidFeedback {
                text: feedback.to_pegs(),
                reason: format!("{} pegs for a code of length {}", feedback.total(), self.length),
            });
        }

        let observation = Observation::new(guess, feedback);
        let filtered = filter(&self.candidates, &observation)?;
        debug!(
            guess = %observation.guess(),
            feedback = %feedback,
            before = self.candidates.len(),
            after = filtered.len(),
            "filtered candidates"
        );

        self.observations.push(observation);
        self.candidates = filtered;

        let budget_spent = self
            .attempt_budget
            .is_some_and(|budget| self.observations.len() >= budget);

        let next = if self.candidates.is_empty() {
            warn!(
                observations = self.observations.len(),
                "feedback history admits no secret"
            );
            PoolState::Exhausted
        } else if feedback.is_perfect(self.length) {
            PoolState::Solved
        } else if budget_spent {
            PoolState::Abandoned
        } else if self.candidates.len() == 1 {
            PoolState::Solved
        } else {
            PoolState::Active
        };

        if next != self.state {
            info!(
                from = %self.state,
                to = %next,
                terminal = next.is_terminal(),
                "candidate pool state changed"
            );
        }
        self.state = next;
        Ok(next)
    }
}
