//! Codemaker mode
//!
//! The computer hides a random secret and the player guesses it.

use super::{SessionEnd, read_line};
use crate::config::GameConfig;
use crate::core::{Code, Feedback};
use crate::output::formatters::{feedback_pegs, format_code};
use crate::output::rules_text;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Play against a random secret on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(config: &GameConfig) -> anyhow::Result<SessionEnd> {
    let secret = config
        .alphabet
        .random_code(config.length, &mut rand::rng())?;
    let stdin = io::stdin();
    play_session(config, &secret, &mut stdin.lock(), &mut io::stdout())
}

/// Let the player guess `secret`, reading guesses from `input`
///
/// Malformed guesses are reported and do not use up an attempt. `quit` or
/// end of input ends the game early; `rules` prints the rules. Commands are
/// only recognized on lines that do not parse as a guess.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn play_session<R: BufRead, W: Write>(
    config: &GameConfig,
    secret: &Code,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SessionEnd> {
    writeln!(
        output,
        "\nI picked a secret of {} pegs from {}. You have {} guesses.",
        config.length, config.alphabet, config.max_attempts
    )?;
    writeln!(output, "Commands: 'rules' to show the rules, 'quit' to give up\n")?;

    for attempt in 1..=config.max_attempts {
        let guess = loop {
            write!(output, "Guess {attempt}/{}: ", config.max_attempts)?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                writeln!(output)?;
                return Ok(SessionEnd::Quit);
            };

            // A valid guess always wins over a command of the same spelling
            let error = match config.parse_code(&line) {
                Ok(code) => break code,
                Err(e) => e,
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "The secret was {}", format_code(secret))?;
                    return Ok(SessionEnd::Quit);
                }
                "rules" => writeln!(output, "\n{}\n", rules_text(config))?,
                _ => writeln!(output, "{} {error}", "❌".red())?,
            }
        };

        let feedback = Feedback::score(secret, &guess)?;
        debug!(attempt, guess = %guess, feedback = %feedback, "scored guess");

        writeln!(
            output,
            "  {} {} {}",
            format_code(&guess),
            feedback_pegs(feedback, config.length),
            feedback.to_string().bright_black()
        )?;

        if feedback.is_perfect(config.length) {
            writeln!(
                output,
                "\n{}",
                format!("🎉 Cracked it in {attempt} guesses!").green().bold()
            )?;
            return Ok(SessionEnd::Solved(attempt));
        }
    }

    writeln!(
        output,
        "\n{} The secret was {}",
        "Out of guesses.".red().bold(),
        format_code(secret)
    )?;
    Ok(SessionEnd::Abandoned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(config: &GameConfig, secret: &str, script: &str) -> (SessionEnd, String) {
        colored::control::set_override(false);
        let secret = config.parse_code(secret).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let end = play_session(config, &secret, &mut input, &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solved_on_second_guess() {
        let (end, output) = run(&GameConfig::default(), "GRBY", "GBRY\ngrby\n");

        assert_eq!(end, SessionEnd::Solved(2));
        assert!(output.contains("bbww"));
        assert!(output.contains("Cracked it in 2"));
    }

    #[test]
    fn malformed_guess_does_not_count() {
        let (end, output) = run(&GameConfig::default(), "GRBY", "GRB\nGRBX\nGRBY\n");

        assert_eq!(end, SessionEnd::Solved(1));
        assert!(output.contains("expected 4"));
    }

    #[test]
    fn running_out_of_guesses() {
        let config = GameConfig::from_args("GRBYOP", 4, 2).unwrap();
        let (end, output) = run(&config, "PPPP", "GGGG\nRRRR\nPPPP\n");

        assert_eq!(end, SessionEnd::Abandoned);
        assert!(output.contains("The secret was PPPP"));
    }

    #[test]
    fn quit_and_end_of_input() {
        let config = GameConfig::default();

        let (end, output) = run(&config, "OOPP", "quit\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("OOPP"));

        let (end, _) = run(&config, "OOPP", "GGGG\n");
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn guesses_that_spell_commands_are_scored() {
        let config = GameConfig::from_args("QRB", 1, 3).unwrap();
        let (end, _) = run(&config, "Q", "q\n");
        assert_eq!(end, SessionEnd::Solved(1));

        let config = GameConfig::from_args("QUITAB", 4, 3).unwrap();
        let (end, output) = run(&config, "ABBA", "QUIT\nexit\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("Guess 2/3"));
        assert!(output.contains("The secret was ABBA"));
    }

    #[test]
    fn rules_command_does_not_use_a_guess() {
        let (end, output) = run(&GameConfig::default(), "YYYY", "rules\nYYYY\n");

        assert_eq!(end, SessionEnd::Solved(1));
        assert!(output.contains("right color in the right position"));
    }
}
