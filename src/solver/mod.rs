//! Best-first search solver
//!
//! Clue-consistency filtering, pluggable heuristics and the search loop that
//! ties them together.

mod config;
pub mod consistency;
mod engine;
pub mod frontier;
pub mod heuristic;
mod stats;
pub mod visited;

pub use config::SearchConfig;
pub use consistency::{ConsistencyCheck, is_consistent};
pub use engine::{SearchEngine, SearchOutcome, Termination};
pub use heuristic::{
    EstimateContext, Heuristic, HeuristicType, LetterSimilarity, SimilarityBreakdown,
    SimilarityWeights, Uniform,
};
pub use stats::{RunStats, StatsRecord};
pub use visited::{VisitedPolicy, VisitedSet};
