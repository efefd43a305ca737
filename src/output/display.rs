//! Display functions for command results

use super::formatters::{guess_line, stat_bar, word_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{RunStats, Termination};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (start: {}, {})",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.start.text().to_uppercase(),
        result.algorithm
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nGuess {}: {}", i + 1, guess_line(&step.word, &step.clue));
    }

    println!();
    match result.outcome.termination {
        Termination::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        Termination::Exhausted => println!(
            "{}",
            "❌ Frontier exhausted without reaching the secret"
                .red()
                .bold()
        ),
        Termination::LimitReached => println!(
            "{}",
            "⏱  Expansion limit reached before the secret".yellow().bold()
        ),
    }

    print_run_stats(&result.outcome.stats, verbose);
}

/// Print run statistics as a small bar chart, optionally with the expansion log
pub fn print_run_stats(stats: &RunStats, show_expanded: bool) {
    println!("\n📊 {}", "Search Performance".bright_cyan().bold());

    let max = stats
        .expansions()
        .max(stats.max_frontier())
        .max(stats.max_memory());
    println!("   {}", stat_bar("Expanded nodes", stats.expansions(), max, 30));
    println!("   {}", stat_bar("Max open size", stats.max_frontier(), max, 30));
    println!("   {}", stat_bar("Max memory", stats.max_memory(), max, 30));
    println!("   Nodes generated:  {}", stats.nodes_generated());
    println!("   Search time:      {:.4}s", stats.elapsed_secs());

    if show_expanded {
        println!("\n🔎 {}", "Expanded Nodes".bright_cyan().bold());
        println!("   {}", word_list(stats.expanded_nodes()));
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "HEURISTIC ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let b = &result.breakdown;
    let w = &result.weights;
    println!("\n🧮 Letter similarity:");
    println!(
        "   Positional mismatch:  {} × {} = {}",
        b.positional_mismatch,
        w.positional_mismatch,
        b.positional_mismatch * w.positional_mismatch
    );
    println!(
        "   Foreign letters:      {} × {} = {}",
        b.foreign_letters,
        w.foreign_letters,
        b.foreign_letters * w.foreign_letters
    );
    println!(
        "   Frequency imbalance:  {} × {} = {}",
        b.frequency_imbalance,
        w.frequency_imbalance,
        b.frequency_imbalance * w.frequency_imbalance
    );
    println!(
        "   Estimate:             {}",
        result.estimate.to_string().bright_yellow().bold()
    );

    println!("\n🟩 Clues:");
    println!(
        "   {} against {}: {} ({})",
        result.word.text().to_uppercase(),
        result.secret.text().to_uppercase(),
        result.clue.to_emoji(),
        result.clue
    );
    println!(
        "   {} against {}: {} ({})",
        result.secret.text().to_uppercase(),
        result.word.text().to_uppercase(),
        result.reverse_clue.to_emoji(),
        result.reverse_clue
    );
    if !result.is_symmetric() {
        println!(
            "   {}",
            "Directions differ: consistency checks depend on which side is the source".yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:       {}", result.total_words);
    println!(
        "   Solved:             {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average path:       {}",
        format!("{:.2}", result.average_path_length)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Shortest path:      {}",
        format!("{}", result.min_path_length).green()
    );
    println!(
        "   Longest path:       {}",
        format!("{}", result.max_path_length).yellow()
    );
    println!("   Avg expansions:     {:.1}", result.average_expansions);
    println!("   Max expansions:     {}", result.max_expansions);
    println!("   Max open size:      {}", result.max_frontier);
    println!("   Max memory:         {}", result.max_memory);
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:       {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<usize> = result.distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = result.distribution[&length];
        let pct = (count as f64 / result.total_words.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
