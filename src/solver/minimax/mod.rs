//! Minimax guess selection
//!
//! Knuth-style worst-case minimization over feedback partitions.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::select_best_guess;
