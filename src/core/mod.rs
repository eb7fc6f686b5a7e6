//! Core domain types for the codebreaker game
//!
//! Symbols, alphabets, codes and the feedback scorer. Everything here is pure
//! and free of I/O; the candidate pool in `solver` builds on these types.

mod alphabet;
mod code;
mod error;
mod feedback;
mod session;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS, Symbol};
pub use code::{Code, MAX_CODE_LENGTH};
pub(crate) use code::check_length;
pub use error::{CodebreakerError, Result};
pub use feedback::{EXACT_MARKER, Feedback, PARTIAL_MARKER, score};
pub use session::{Observation, PoolState};
