//! Codebreaker - CLI
//!
//! Mastermind-style code breaking: play against the computer, let it break
//! your code, or measure how its strategies perform.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{
        SessionEnd, analyze_code, run_assist, run_benchmark, run_play, solve_code,
    },
    config::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig},
    core::{Code, DEFAULT_SYMBOLS},
    logging::init_tracing,
    output::{print_analysis_result, print_benchmark_result, print_rules, print_solve_result},
    solver::{StrategyType, initialize},
};
use rand::seq::IndexedRandom;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Mastermind codebreaker using candidate elimination with minimax and entropy strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), entropy, random, naive
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Peg colors, one character each
    #[arg(short, long, global = true, default_value = DEFAULT_SYMBOLS)]
    alphabet: String,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Log solver internals to stderr (overridden by CODEBREAKER_LOG)
    #[arg(long, global = true)]
    verbose_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a secret picked by the computer (default)
    Play,

    /// The computer guesses a secret you think of
    Assist,

    /// Solve a specific secret
    Solve {
        /// The secret to solve
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits every possible secret
    Analyze {
        /// Guess to analyze
        code: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test (default: every possible secret)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show the rules of the game
    Rules,
}

fn parse_strategy(name: &str) -> Result<StrategyType> {
    match StrategyType::from_name(name) {
        Some(strategy) => Ok(strategy),
        None => bail!(
            "unknown strategy '{name}', expected one of: {}",
            StrategyType::NAMES.join(", ")
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose_log);

    let config = GameConfig::from_args(&cli.alphabet, cli.length, cli.max_attempts)
        .context("invalid game configuration")?;
    let strategy = parse_strategy(&cli.strategy)?;
    info!(
        alphabet = %config.alphabet,
        length = config.length,
        max_attempts = config.max_attempts,
        strategy = strategy.name(),
        "starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => report(run_play(&config)?),
        Commands::Assist => report(run_assist(&config, &strategy)?),
        Commands::Solve { code, verbose } => {
            let secret = config.parse_code(&code)?;
            let result = solve_code(&config, &secret, &strategy)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { code } => {
            let universe = initialize(&config.alphabet, config.length)?;
            let result = analyze_code(&config, &code, universe.as_slice())?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count } => run_benchmark_command(&config, strategy, count)?,
        Commands::Rules => print_rules(&config),
    }

    Ok(())
}

fn report(end: SessionEnd) {
    info!(?end, "session ended");
}

fn run_benchmark_command(
    config: &GameConfig,
    strategy: StrategyType,
    count: Option<usize>,
) -> Result<()> {
    let universe = initialize(&config.alphabet, config.length)?;

    let secrets: Vec<Code> = match count {
        Some(count) if count < universe.len() => {
            println!(
                "Running benchmark on {count} random secrets with {}...",
                strategy.name()
            );
            universe
                .as_slice()
                .choose_multiple(&mut rand::rng(), count)
                .cloned()
                .collect()
        }
        _ => {
            println!(
                "Running benchmark on all {} secrets with {}...",
                universe.len(),
                strategy.name()
            );
            universe.as_slice().to_vec()
        }
    };

    let result = run_benchmark(config, &strategy, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}
