//! A* Wordle Solver - CLI
//!
//! Best-first search solver with run statistics and experiment logging.

use anyhow::{Result, anyhow, bail};
use astar_wordle::{
    commands::{
        SolveConfig, analyze_word, print_test_all_statistics, resolve_start, run_benchmark,
        run_test_all, sample_secrets, solve_word,
    },
    core::Word,
    output::{
        JsonLinesSink, StatsSink, print_analysis_result, print_benchmark_result,
        print_solve_result, publish_or_warn,
    },
    solver::{
        ConsistencyCheck, Heuristic, HeuristicType, LetterSimilarity, SearchConfig,
        SearchEngine, SimilarityWeights, Uniform, VisitedPolicy,
    },
    wordlists::{WORDS, loader},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "astar_wordle",
    about = "Wordle solver using best-first search with clue-consistency pruning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length; the dictionary is filtered to this length
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Frontier ordering heuristic
    #[arg(long, global = true, value_enum, default_value = "similarity")]
    heuristic: HeuristicArg,

    /// Which expanded states are pruned
    #[arg(long, global = true, value_enum, default_value = "first-arrival")]
    visited: VisitedArg,

    /// Direction in which past clues are recomputed for a candidate
    #[arg(long, global = true, value_enum, default_value = "candidate-source")]
    consistency: ConsistencyArg,

    /// Give up after this many expansions
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Append each run's statistics as JSON lines to this file
    #[arg(long, global = true)]
    experiments: Option<PathBuf>,

    /// Enable debug logging (one line per expansion)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum HeuristicArg {
    /// Weighted letter similarity to the secret (A*)
    #[value(alias = "astar")]
    Similarity,
    /// Zero estimate, path cost only (UCS)
    #[value(alias = "ucs")]
    Uniform,
}

impl From<HeuristicArg> for HeuristicType {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Similarity => Self::Similarity(LetterSimilarity::default()),
            HeuristicArg::Uniform => Self::Uniform(Uniform),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum VisitedArg {
    /// A word is expanded once, by the first path to reach it
    FirstArrival,
    /// A word may be expanded once per distinct path
    PerPath,
}

impl From<VisitedArg> for VisitedPolicy {
    fn from(arg: VisitedArg) -> Self {
        match arg {
            VisitedArg::FirstArrival => Self::FirstArrivalWins,
            VisitedArg::PerPath => Self::PerPath,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum ConsistencyArg {
    /// Candidate is the clue source, past guess the reference
    CandidateSource,
    /// Candidate is treated as the secret
    CandidateSecret,
}

impl From<ConsistencyArg> for ConsistencyCheck {
    fn from(arg: ConsistencyArg) -> Self {
        match arg {
            ConsistencyArg::CandidateSource => Self::CandidateAsSource,
            ConsistencyArg::CandidateSecret => Self::CandidateAsSecret,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret word
    Solve {
        /// The secret word
        secret: String,

        /// Opening guess (default: AARON when available)
        #[arg(short, long)]
        start: Option<String>,

        /// Also list every expanded node
        #[arg(short = 'x', long)]
        expanded: bool,
    },

    /// Heuristic breakdown and clues of a word against a secret
    Analyze {
        /// Word to score
        word: String,

        /// Secret to score against
        secret: String,
    },

    /// Solve a random sample of secrets in parallel
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Opening guess (default: AARON when available)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Solve every dictionary word in turn
    TestAll {
        /// Limit number of words to test
        #[arg(long)]
        limit: Option<usize>,

        /// Opening guess (default: AARON when available)
        #[arg(short, long)]
        start: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("astar_wordle=debug")
    } else {
        EnvFilter::new("astar_wordle=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Load the dictionary based on the -w and -l flags
fn load_dictionary(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => loader::words_from_slice(WORDS),
        path => loader::load_from_file(path).map_err(|e| anyhow!("Failed to read {path}: {e}"))?,
    };

    let dictionary = loader::with_length(words, length);
    if dictionary.is_empty() {
        bail!("No {length}-letter words in wordlist '{wordlist}'");
    }

    info!(words = dictionary.len(), length, "dictionary loaded");
    Ok(dictionary)
}

fn search_config(cli: &Cli) -> SearchConfig {
    SearchConfig::default()
        .with_consistency(cli.consistency.into())
        .with_visited(cli.visited.into())
        .with_max_expansions(cli.max_expansions)
}

fn build_engine<'a>(cli: &Cli, dictionary: &'a [Word]) -> SearchEngine<'a, HeuristicType> {
    SearchEngine::new(cli.heuristic.into(), dictionary).with_config(search_config(cli))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Solve {
            secret,
            start,
            expanded,
        } => run_solve_command(&cli, secret, start.as_deref(), *expanded),
        Commands::Analyze { word, secret } => run_analyze_command(word, secret),
        Commands::Benchmark { count, seed, start } => {
            run_benchmark_command(&cli, *count, *seed, start.as_deref())
        }
        Commands::TestAll { limit, start } => {
            run_test_all_command(&cli, *limit, start.as_deref())
        }
    }
}

fn run_solve_command(
    cli: &Cli,
    secret: &str,
    start: Option<&str>,
    expanded: bool,
) -> Result<()> {
    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    let engine = build_engine(cli, &dictionary);

    let config = SolveConfig::new(secret.to_string()).with_start(start.map(str::to_string));
    let result = solve_word(config, &engine).map_err(|e| anyhow!(e))?;

    if let Some(path) = &cli.experiments {
        publish_or_warn(
            &mut JsonLinesSink::new(path),
            &result.outcome.stats.record(result.algorithm),
        );
    }
    print_solve_result(&result, expanded || cli.verbose);
    Ok(())
}

fn run_analyze_command(word: &str, secret: &str) -> Result<()> {
    let result = analyze_word(word, secret, SimilarityWeights::default()).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    count: usize,
    seed: Option<u64>,
    start: Option<&str>,
) -> Result<()> {
    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    let engine = build_engine(cli, &dictionary);

    let start = resolve_start(start, &dictionary).map_err(|e| anyhow!(e))?;
    let secrets = sample_secrets(&dictionary, count, seed);
    println!(
        "Running benchmark on {} random secrets from {}...",
        secrets.len(),
        start.text().to_uppercase()
    );

    let result = run_benchmark(&engine, &secrets, &start);
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(cli: &Cli, limit: Option<usize>, start: Option<&str>) -> Result<()> {
    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    let engine = build_engine(cli, &dictionary);

    let start = resolve_start(start, &dictionary).map_err(|e| anyhow!(e))?;
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive A* Wordle Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nDictionary: {} words | heuristic: {} | visited: {} | consistency: {}",
        dictionary.len(),
        engine.heuristic().name(),
        engine.config().visited.name(),
        engine.config().consistency.name()
    );
    println!();

    let mut sink = cli.experiments.as_ref().map(JsonLinesSink::new);
    let sink = sink.as_mut().map(|s| s as &mut dyn StatsSink);
    let stats = run_test_all(&engine, &dictionary, &start, limit, sink);
    print_test_all_statistics(&stats);
    Ok(())
}
