//! Codebreaker
//!
//! A Mastermind-style code-guessing engine: a consume-once feedback scorer and
//! a candidate pool that narrows every possible secret down to those
//! consistent with the feedback seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Alphabet, Code, Feedback};
//!
//! let alphabet = Alphabet::default();
//! let secret = Code::parse("GRBY", &alphabet, 4).unwrap();
//! let guess = Code::parse("GBRY", &alphabet, 4).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess).unwrap();
//! assert_eq!(feedback.to_string(), "bbww");
//! ```

// Core domain types and the scorer
pub mod core;

// Candidate pool and guess strategies
pub mod solver;

// Game parameters
pub mod config;

// Game modes driven from the CLI
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
