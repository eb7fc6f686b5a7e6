//! Command implementations
//!
//! Each game mode drives a candidate pool (or a secret) through rounds of
//! guesses and feedback.

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use assist::{assist_session, run_assist};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{play_session, run_play};
pub use solve::{GuessStep, SolveResult, solve_code};

use std::io::BufRead;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The code was found after this many guesses
    Solved(usize),
    /// Every attempt was used without finding the code
    Abandoned,
    /// The player quit or input ran out
    Quit,
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
