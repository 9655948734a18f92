//! Ladder Solver - CLI
//!
//! Enumerates all shortest word ladders between two words using a
//! bidirectional BFS over the one-letter-substitution graph.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ladder_solver::{
    commands::{run_benchmark, solve_pair},
    lexicon::{WORDS, loader::lexicon_from_slice, loader::read_lexicon},
    output::{print_benchmark_result, print_solve_result},
};
use rustc_hash::FxHashSet;

#[derive(Parser)]
#[command(
    name = "ladder_solver",
    about = "Finds all shortest word ladders via bidirectional BFS",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default, built-in demo list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all shortest ladders between two words
    Solve {
        /// Start word
        from: String,

        /// End word
        to: String,

        /// Show lexicon size and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark generator throughput on random word pairs
    Benchmark {
        /// Number of random pairs to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the lexicon selected by the -w flag
fn load_lexicon(wordlist_mode: &str) -> Result<FxHashSet<String>> {
    match wordlist_mode {
        "embedded" => Ok(lexicon_from_slice(WORDS)),
        path => Ok(read_lexicon(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;

    match cli.command {
        Commands::Solve { from, to, verbose } => {
            let result = solve_pair(&from, &to, &lexicon);
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count } => match run_benchmark(&lexicon, count) {
            Some(result) => print_benchmark_result(&result),
            None => anyhow::bail!("wordlist has no two words of equal length to pair up"),
        },
    }

    Ok(())
}
