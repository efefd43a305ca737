//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use solve::{DEFAULT_START, SolveConfig, SolveResult, default_start, resolve_start, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
