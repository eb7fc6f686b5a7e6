//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, feedback_pegs, format_code};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::config::GameConfig;
use crate::core::{EXACT_MARKER, PARTIAL_MARKER, PoolState};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            format_code(&step.guess),
            feedback_pegs(step.feedback, length),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {}", step.worst_case);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    let guesses = result.steps.len();
    match result.outcome {
        PoolState::Solved => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        PoolState::Exhausted => println!(
            "{}",
            format!("❌ No code fits the feedback after {guesses} guesses")
                .red()
                .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {guesses} guesses").red().bold()
        ),
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        format_code(&result.code)
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.code.len(), 30);

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain ({:.1} eliminated)",
        metrics.expected_remaining,
        result.expected_eliminated()
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);
    println!("   Outcomes:    {}", metrics.partitions);

    if result.partitions.is_empty() {
        return;
    }

    println!("\n📈 {}", "Feedback groups:".bright_cyan().bold());
    let largest = result.partitions[0].1 as f64;
    for &(feedback, size) in &result.partitions {
        println!(
            "   {} {:>5} {}",
            feedback_pegs(feedback, result.code.len()),
            size,
            create_progress_bar(size as f64, largest, 30).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    if result.total_codes > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=result.max_guesses {
            if let Some(&count) = result.distribution.get(&guess_count) {
                let pct = (count as f64 / result.total_codes as f64) * 100.0;
                let bar_width = ((pct / 2.5) as usize).min(40);
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░".repeat(40 - bar_width).bright_black()
                );
                println!("   {guess_count:2}: {bar} {count:5} ({pct:5.1}%)");
            }
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Not solved:".red().bold());
        for secret in result.failures.iter().take(20) {
            println!("   {}", format_code(secret));
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}

/// The rules of the game for `config`
#[must_use]
pub fn rules_text(config: &GameConfig) -> String {
    format!(
        "The codemaker picks a secret of {length} pegs from the colors {alphabet}.\n\
         Colors may repeat. The codebreaker has {attempts} guesses to find it.\n\
         \n\
         After each guess the codemaker answers with pegs:\n\
         \x20 {EXACT_MARKER}  right color in the right position\n\
         \x20 {PARTIAL_MARKER}  right color in the wrong position\n\
         \n\
         Each secret peg is matched at most once, exact matches first.\n\
         For example secret GRBY against guess GBRY scores {EXACT_MARKER}{EXACT_MARKER}{PARTIAL_MARKER}{PARTIAL_MARKER}.\n\
         Feedback may be typed in any order; an empty line means no pegs.",
        length = config.length,
        alphabet = config.alphabet,
        attempts = config.max_attempts,
    )
}

/// Print the rules of the game
pub fn print_rules(config: &GameConfig) {
    println!("\n{}", "RULES".bright_cyan().bold());
    println!("{}\n", rules_text(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_describe_configuration() {
        let config = GameConfig::from_args("ABC", 3, 7).unwrap();
        let text = rules_text(&config);

        assert!(text.contains("3 pegs"));
        assert!(text.contains("ABC"));
        assert!(text.contains("7 guesses"));
        assert!(text.contains("bbww"));
    }
}
