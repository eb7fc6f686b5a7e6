//! Codebreaker mode
//!
//! The player thinks of a secret and scores the computer's guesses.

use super::{SessionEnd, read_line};
use crate::config::GameConfig;
use crate::core::{Feedback, Observation, PoolState};
use crate::output::formatters::{feedback_pegs, format_code};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{CandidatePool, Strategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Guess the player's secret on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// strategy cannot provide a guess.
pub fn run_assist<S: Strategy + ?Sized>(
    config: &GameConfig,
    strategy: &S,
) -> anyhow::Result<SessionEnd> {
    let stdin = io::stdin();
    assist_session(config, strategy, &mut stdin.lock(), &mut io::stdout())
}

/// Rebuild a pool from a feedback history
fn replay(config: &GameConfig, history: &[Observation]) -> crate::core::Result<CandidatePool> {
    let mut pool = config.new_pool()?;
    for observation in history {
        pool.record_observation(observation.guess().clone(), observation.feedback())?;
    }
    Ok(pool)
}

/// Rebuild `pool` without its last observation; `false` if there is none
fn undo(config: &GameConfig, pool: &mut CandidatePool) -> crate::core::Result<bool> {
    let Some((_, kept)) = pool.observations().split_last() else {
        return Ok(false);
    };
    *pool = replay(config, kept)?;
    Ok(true)
}

/// Guess the player's secret, reading feedback from `input`
///
/// Feedback is typed as pegs (`b` exact, `w` partial, any order, empty line
/// for none). `win` marks the guess correct; `undo`, `new` and `quit`
/// control the session. Feedback that no code could produce is caught as
/// soon as it empties the candidate pool.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails, or if the
/// strategy cannot provide a guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn assist_session<S, R, W>(
    config: &GameConfig,
    strategy: &S,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SessionEnd>
where
    S: Strategy + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "\nThink of a secret of {} pegs from {}. I have {} guesses.",
        config.length, config.alphabet, config.max_attempts
    )?;
    writeln!(
        output,
        "Score each guess with '{}' per right color in the right place and '{}' per right color in the wrong place.",
        "b".bold(),
        "w".bold()
    )?;
    writeln!(
        output,
        "Commands: 'win' if I got it, 'undo', 'new', 'quit'\n"
    )?;

    let mut pool = config.new_pool()?;

    'game: loop {
        match pool.state() {
            PoolState::Exhausted => {
                writeln!(
                    output,
                    "\n{}",
                    "❌ No code fits that feedback. Some answer must be wrong.".red()
                )?;
                writeln!(output, "Type 'undo' to go back, or 'new' to start over.\n")?;

                loop {
                    write!(output, "Command: ")?;
                    output.flush()?;
                    let Some(line) = read_line(input)? else {
                        return Ok(SessionEnd::Quit);
                    };
                    match line.to_lowercase().as_str() {
                        "undo" | "u" => {
                            undo(config, &mut pool)?;
                            continue 'game;
                        }
                        "new" | "n" => {
                            pool = config.new_pool()?;
                            continue 'game;
                        }
                        "quit" | "q" | "exit" => return Ok(SessionEnd::Quit),
                        _ => writeln!(output, "Type 'undo', 'new' or 'quit'.")?,
                    }
                }
            }
            PoolState::Abandoned => {
                writeln!(
                    output,
                    "\n{}",
                    format!("Out of guesses after {} tries. You win!", config.max_attempts)
                        .yellow()
                        .bold()
                )?;
                return Ok(SessionEnd::Abandoned);
            }
            _ => {}
        }

        let attempt = pool.observations().len() + 1;
        let candidates = pool.candidates().as_slice();
        let guess = pool.next_guess(strategy)?;
        let metrics = calculate_metrics(&guess, candidates);

        let guesses_left = pool.remaining_attempts().unwrap_or(config.max_attempts);
        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(
            output,
            "Turn {attempt}: {} candidates remaining, {guesses_left} guesses left",
            candidates.len()
        )?;
        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(output, "\n📊 My guess: {}", format_code(&guess))?;
        writeln!(output, "   Entropy:     {:.3} bits", metrics.entropy)?;
        writeln!(output, "   Worst case:  {} candidates\n", metrics.max_partition)?;

        if candidates.len() <= 10 {
            writeln!(output, "Remaining candidates:")?;
            for candidate in candidates {
                writeln!(output, "  • {}", format_code(candidate))?;
            }
            writeln!(output)?;
        }

        let feedback = loop {
            write!(output, "Feedback: ")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(SessionEnd::Quit);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(SessionEnd::Quit);
                }
                "new" | "n" => {
                    pool = config.new_pool()?;
                    writeln!(output, "\n🔄 New game started!\n")?;
                    continue 'game;
                }
                "undo" | "u" => {
                    if undo(config, &mut pool)? {
                        writeln!(output, "✓ Undone! Back to turn {}\n", attempt - 1)?;
                        continue 'game;
                    }
                    writeln!(output, "Nothing to undo!")?;
                }
                "win" | "solved" | "yes" => break config.perfect(),
                text => match config.parse_feedback(text) {
                    Ok(feedback) => break feedback,
                    Err(e) => writeln!(output, "{} {e}", "❌".red())?,
                },
            }
        };

        pool.record_observation(guess.clone(), feedback)?;
        writeln!(
            output,
            "  {} {}\n",
            format_code(&guess),
            feedback_pegs(feedback, config.length)
        )?;

        if feedback == Feedback::perfect(config.length) {
            writeln!(
                output,
                "{}",
                format!("🎉 Solved in {attempt} guesses!").green().bold()
            )?;
            return Ok(SessionEnd::Solved(attempt));
        }
    }
}
