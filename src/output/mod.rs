//! Terminal output and reporting
//!
//! Display utilities for CLI results and sinks for run statistics.

pub mod display;
pub mod formatters;
pub mod sink;

pub use display::{
    print_analysis_result, print_benchmark_result, print_run_stats, print_solve_result,
};
pub use sink::{JsonLinesSink, StatsSink, publish_or_warn};
