//! Candidate elimination and guess selection
//!
//! The candidate pool narrows the universe of secrets; strategies pick the
//! next guess from whatever remains.

pub mod entropy;
pub mod minimax;
mod pool;
pub mod strategy;

pub use pool::{
    CandidatePool, CandidateSet, MAX_UNIVERSE_SIZE, filter, initialize, select_next_guess,
    universe_size,
};
pub use strategy::{
    EntropyStrategy, MinimaxStrategy, NaiveStrategy, RandomStrategy, Strategy, StrategyType,
};
