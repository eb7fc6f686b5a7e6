//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Symbol};
use colored::{ColoredString, Colorize};

/// Peg drawn for a symbol in the right position
pub const EXACT_PEG: char = '●';

/// Peg drawn for a symbol in the wrong position
pub const PARTIAL_PEG: char = '○';

/// Placeholder for a position that earned no peg
pub const EMPTY_PEG: char = '·';

/// Color a symbol after the peg it names; other symbols stay plain
#[must_use]
pub fn color_symbol(symbol: Symbol) -> ColoredString {
    let text = symbol.to_string();
    match symbol.as_char() {
        'G' => text.green().bold(),
        'R' => text.red().bold(),
        'B' => text.blue().bold(),
        'Y' => text.yellow().bold(),
        'O' => text.truecolor(255, 165, 0).bold(),
        'P' => text.magenta().bold(),
        _ => text.bold(),
    }
}

/// Format a code with one colored letter per position
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|&symbol| color_symbol(symbol).to_string())
        .collect()
}

/// Format feedback as a row of `length` pegs, exact pegs first
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        EXACT_PEG.to_string().repeat(exact).bright_white().bold(),
        PARTIAL_PEG.to_string().repeat(partial).white(),
        EMPTY_PEG.to_string().repeat(empty).bright_black()
    )
}

/// Distinct feedbacks a guess of `length` can receive
///
/// Every (exact, partial) with `exact + partial <= length`, except
/// `length - 1` exact with one partial.
#[must_use]
pub const fn feedback_outcomes(length: usize) -> usize {
    (length + 1) * (length + 2) / 2 - 1
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the best a guess could do
#[must_use]
pub fn entropy_bar(entropy: f64, length: usize, width: usize) -> String {
    let max_entropy = (feedback_outcomes(length) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn pegs_list_exact_then_partial() {
        plain();
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
        assert_eq!(feedback_pegs(Feedback::perfect(4), 4), "●●●●");
    }

    #[test]
    fn code_keeps_its_letters() {
        plain();
        let code = Code::parse("GRBY", &Alphabet::default(), 4).unwrap();
        assert_eq!(format_code(&code), "GRBY");
    }

    #[test]
    fn outcome_counts() {
        assert_eq!(feedback_outcomes(1), 2);
        assert_eq!(feedback_outcomes(4), 14);
        assert_eq!(feedback_outcomes(5), 20);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
