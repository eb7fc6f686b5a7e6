//! Entropy-based guess selection
//!
//! Shannon entropy of the feedback distribution a guess would produce.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
