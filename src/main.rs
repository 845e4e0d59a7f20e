//! HangmanAI - CLI
//!
//! Hangman guesser driven by a prediction graph and popularity-weighted
//! scoring. Plays interactively, solves a known word, or benchmarks itself.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_ai::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_word},
    output::{print_benchmark_result, print_solve_result},
    solver::SolverConfig,
    wordlists::{WordData, loader::derive_fragments},
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_ai",
    about = "Hangman guesser driven by a prediction graph",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Prefix/suffix file: '+un' marks a prefix, '-ing' a suffix.
    /// Derived from the dictionary when omitted.
    #[arg(short = 'f', long, global = true)]
    fragments: Option<PathBuf>,

    /// Word popularity file of 'word weight' pairs
    #[arg(short = 'p', long, global = true)]
    popularity: Option<PathBuf>,

    /// Letters proposed per open segment each round
    #[arg(long, global = true, default_value = "2")]
    depth: usize,

    /// Segments of this length are not extended further
    #[arg(long, global = true, default_value = "5")]
    max_segment: usize,

    /// Show progress bars for the scoring passes
    #[arg(long, global = true)]
    progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you host, the solver guesses (default)
    Play {
        /// Length of the hidden word; asked for when omitted
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per guess
        #[arg(short, long)]
        verbose: bool,

        /// Wrong guesses allowed before the game is lost
        #[arg(short = 'm', long, default_value = "6")]
        max_wrong: usize,
    },

    /// Benchmark solver performance on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Only test words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for the word sample
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Wrong guesses allowed before a game is lost
        #[arg(short = 'm', long, default_value = "6")]
        max_wrong: usize,
    },

    /// Print the prefixes and suffixes derived from the dictionary, in the
    /// fragment file format
    Bits,
}

/// Load the dictionary plus optional fragment and popularity files
fn load_word_data(cli: &Cli) -> Result<WordData> {
    let data = WordData::load(
        &cli.words,
        cli.fragments.as_deref(),
        cli.popularity.as_deref(),
    )
    .with_context(|| {
        format!(
            "failed to load word data (dictionary: {})",
            cli.words.display()
        )
    })?;

    if data.dictionary.is_empty() {
        bail!("dictionary {} contains no usable words", cli.words.display());
    }
    info!(
        "loaded {} words, {} fragments, {} popularity entries",
        data.dictionary.len(),
        data.fragments.len(),
        data.popularity.len()
    );
    Ok(data)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = load_word_data(&cli)?;
    let solver_config =
        SolverConfig::new(cli.depth, cli.max_segment).with_progress(cli.progress);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { length: None });

    match command {
        Commands::Play { length } => {
            run_play(&data, solver_config, length).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Solve {
            word,
            verbose,
            max_wrong,
        } => {
            let config = SolveConfig::new(word).with_max_wrong(max_wrong);
            let result =
                solve_word(config, &data, solver_config).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, max_wrong, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
            max_wrong,
        } => {
            println!("Running benchmark on {count} random words (seed {seed})...");
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                max_wrong,
                show_progress: true,
            };
            let result = run_benchmark(&data, &config, solver_config.with_progress(false));
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Bits => {
            for fragment in derive_fragments(&data.dictionary) {
                println!("{}", fragment.to_line());
            }
            Ok(())
        }
    }
}
