//! Benchmark command
//!
//! Runs independent searches for a random sample of secrets in parallel and
//! aggregates their statistics.

use crate::core::Word;
use crate::solver::{Heuristic, SearchEngine, SearchOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub average_path_length: f64,
    pub min_path_length: usize,
    pub max_path_length: usize,
    pub average_expansions: f64,
    pub max_expansions: usize,
    pub max_frontier: usize,
    pub max_memory: usize,
    /// Solved path length -> number of secrets
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct secrets from the dictionary
///
/// A fixed `seed` gives a reproducible sample.
#[must_use]
pub fn sample_secrets(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    dictionary
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Run one search per secret, in parallel, all from the same start word
pub fn run_benchmark<H: Heuristic + Sync>(
    engine: &SearchEngine<H>,
    secrets: &[Word],
    start: &Word,
) -> BenchmarkResult {
    let started = Instant::now();

    let outcomes: Vec<SearchOutcome> = secrets
        .par_iter()
        .map(|secret| engine.search(secret, start))
        .collect();

    let duration = started.elapsed();
    summarize(&outcomes, duration)
}

fn summarize(outcomes: &[SearchOutcome], duration: Duration) -> BenchmarkResult {
    let total_words = outcomes.len();
    let solved_lengths: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.is_solved())
        .map(|o| o.path.len())
        .collect();
    let solved = solved_lengths.len();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &length in &solved_lengths {
        *distribution.entry(length).or_insert(0) += 1;
    }

    let average_path_length = if solved > 0 {
        solved_lengths.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let total_expansions: usize = outcomes.iter().map(|o| o.stats.expansions()).sum();
    let average_expansions = if total_words > 0 {
        total_expansions as f64 / total_words as f64
    } else {
        0.0
    };

    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        average_path_length,
        min_path_length: solved_lengths.iter().copied().min().unwrap_or(0),
        max_path_length: solved_lengths.iter().copied().max().unwrap_or(0),
        average_expansions,
        max_expansions: outcomes
            .iter()
            .map(|o| o.stats.expansions())
            .max()
            .unwrap_or(0),
        max_frontier: outcomes
            .iter()
            .map(|o| o.stats.max_frontier())
            .max()
            .unwrap_or(0),
        max_memory: outcomes
            .iter()
            .map(|o| o.stats.max_memory())
            .max()
            .unwrap_or(0),
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
