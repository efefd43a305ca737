//! Test all words - comprehensive solver evaluation
//!
//! Runs the search against every dictionary word in turn, publishes each
//! run's record to a reporting sink and aggregates statistics.

use crate::core::Word;
use crate::output::sink::{StatsSink, publish_or_warn};
use crate::solver::{Heuristic, SearchEngine};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
    pub expansions: usize,
    pub max_memory: usize,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub path_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_path_length: f64,
    pub average_expansions: f64,
    pub max_expansions: usize,
    pub max_memory: usize,
    /// Secrets that needed the most expansions, most expensive first
    pub hardest_words: Vec<(String, usize)>,
    /// Secrets the search failed to reach
    pub unreached: Vec<String>,
}

/// Run the search on every word (or a limited prefix) from one start word
///
/// When a sink is given, each run's statistics record is published to it.
/// Sink failures are logged and never interrupt the sweep.
pub fn run_test_all<H: Heuristic>(
    engine: &SearchEngine<H>,
    words: &[Word],
    start: &Word,
    limit: Option<usize>,
    mut sink: Option<&mut dyn StatsSink>,
) -> TestAllStatistics {
    let test_words: Vec<&Word> = words
        .iter()
        .take(limit.unwrap_or(words.len()))
        .collect();

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );

    let algorithm = engine.heuristic().name();
    let mut results = Vec::with_capacity(test_words.len());
    let total_start = Instant::now();

    for (idx, &secret) in test_words.iter().enumerate() {
        let outcome = engine.search(secret, start);

        if let Some(sink) = sink.as_deref_mut() {
            publish_or_warn(sink, &outcome.stats.record(algorithm));
        }

        results.push(WordTestResult {
            word: secret.text().to_string(),
            guesses: outcome.path.iter().map(|w| w.text().to_string()).collect(),
            success: outcome.is_solved(),
            expansions: outcome.stats.expansions(),
            max_memory: outcome.stats.max_memory(),
            duration: outcome.stats.elapsed(),
        });

        if idx % 10 == 0 {
            let solved = results.iter().filter(|r| r.success).count();
            pb.set_message(format!("Solved: {solved}/{}", results.len()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let mut path_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *path_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let average_path_length = if solved_count > 0 {
        solved.iter().map(|r| r.guesses.len()).sum::<usize>() as f64 / solved_count as f64
    } else {
        0.0
    };

    let average_expansions = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.expansions).sum::<usize>() as f64 / results.len() as f64
    };

    let mut hardest_words: Vec<(String, usize)> = results
        .iter()
        .map(|r| (r.word.clone(), r.expansions))
        .collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        path_distribution,
        total_time,
        average_path_length,
        average_expansions,
        max_expansions: results.iter().map(|r| r.expansions).max().unwrap_or(0),
        max_memory: results.iter().map(|r| r.max_memory).max().unwrap_or(0),
        hardest_words,
        unreached: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Not reached:         {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average path:        {}",
        format!("{:.3}", stats.average_path_length)
            .bright_yellow()
            .bold()
    );
    println!("  Average expansions:  {:.1}", stats.average_expansions);
    println!("  Max expansions:      {}", stats.max_expansions);
    println!("  Max memory (nodes):  {}", stats.max_memory);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Path Length Distribution".bright_cyan().bold());
    let max_count = stats.path_distribution.values().copied().max().unwrap_or(1);
    let mut lengths: Vec<usize> = stats.path_distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = stats.path_distribution[&length];
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {length:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Most Expansions".yellow().bold());
        for (word, expansions) in stats.hardest_words.iter().take(5) {
            println!(
                "  {} ({} expansions)",
                word.to_uppercase().yellow(),
                expansions
            );
        }
    }

    if !stats.unreached.is_empty() {
        println!("\n❌ {}", "Unreached Secrets".red().bold());
        for word in stats.unreached.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.unreached.len() > 10 {
            println!("  ... and {} more", stats.unreached.len() - 10);
        }
    }
}
