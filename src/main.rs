//! Wordle Chain - CLI
//!
//! Interactive Wordle helper plus simulation commands for the constraint chain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use wordle_chain::{
    commands::{
        SolveConfig, list_candidates, print_test_all_statistics, run_benchmark, run_play_stdio,
        run_test_all, sample_answers, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_candidates, print_solve_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_chain",
    about = "Wordle solver that filters a dictionary through a chain of letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded dictionary) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Maximum guesses per simulated game
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): print guesses, read g/y/x feedback
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show the chain depth after every turn
        #[arg(long)]
        steps: bool,
    },

    /// List every word consistent with rounds already played
    Candidates {
        /// Rounds as GUESS:FEEDBACK, e.g. arose:xxgxx
        rounds: Vec<String>,

        /// Print the accumulated constraints
        #[arg(short, long)]
        explain: bool,
    },

    /// Benchmark solver performance on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use wordle_chain::wordlists::loader::load_from_file;

    let words = match wordlist {
        "all" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'"))?,
    };

    info!("loaded {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play_stdio(&words)?;
        }
        Commands::Solve { word, steps } => {
            let config = SolveConfig {
                target: word,
                max_guesses: cli.max_guesses,
            };
            let result = solve_word(&config, &words)?;
            print_solve_result(&result, steps);
        }
        Commands::Candidates { rounds, explain } => {
            let list = list_candidates(&rounds, &words)?;
            print_candidates(&list, explain);
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_answers(&words, count, seed);
            let result = run_benchmark(&words, &targets, cli.max_guesses);
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit } => {
            println!("\nTesting against {} dictionary words", words.len());
            let stats = run_test_all(&words, limit, cli.max_guesses, true);
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
