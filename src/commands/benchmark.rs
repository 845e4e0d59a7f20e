//! Benchmark command
//!
//! Plays self-hosted games against a seeded random sample of dictionary
//! words.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::SolverConfig;
use crate::wordlists::WordData;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
pub struct BenchmarkConfig {
    pub count: usize,
    /// Only sample words of this length
    pub length: Option<usize>,
    pub seed: u64,
    pub max_wrong: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            length: None,
            seed: 0,
            max_wrong: 6,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Games aborted by a solver error
    pub errors: usize,
    pub total_guesses: usize,
    pub total_wrong: usize,
    /// Wrong guesses per game -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        ratio(self.solved, self.total_words) * 100.0
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        ratio(self.total_guesses, self.total_words)
    }

    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        ratio(self.total_wrong, self.total_words)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Draw up to `count` distinct targets from `dictionary`, reproducibly for a
/// given `seed`
#[must_use]
pub fn sample_targets(
    dictionary: &[Word],
    length: Option<usize>,
    count: usize,
    seed: u64,
) -> Vec<Word> {
    let pool: Vec<&Word> = dictionary
        .iter()
        .filter(|w| length.is_none_or(|l| w.len() == l))
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    pool.choose_multiple(&mut rng, count)
        .map(|&w| w.clone())
        .collect()
}

/// Run a self-hosted game for each sampled target
#[must_use]
pub fn run_benchmark(
    data: &WordData,
    config: &BenchmarkConfig,
    solver_config: SolverConfig,
) -> BenchmarkResult {
    let targets = sample_targets(&data.dictionary, config.length, config.count, config.seed);
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        errors: 0,
        total_guesses: 0,
        total_wrong: 0,
        distribution: BTreeMap::new(),
        duration: Duration::ZERO,
    };

    for target in &targets {
        pb.set_message(target.text().to_string());
        let solve_config =
            SolveConfig::new(target.text().to_string()).with_max_wrong(config.max_wrong);

        match solve_word(solve_config, data, solver_config) {
            Ok(game) => {
                if game.success {
                    result.solved += 1;
                }
                result.total_guesses += game.total_guesses();
                result.total_wrong += game.wrong_guesses;
                *result.distribution.entry(game.wrong_guesses).or_insert(0) += 1;
            }
            Err(e) => {
                warn!("game for '{target}' aborted: {e}");
                result.errors += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    result.duration = start.elapsed();
    result
}
