//! Search configuration

use super::{ConsistencyCheck, VisitedPolicy};

/// Policies and limits for one search run
///
/// The default reproduces plain best-first search: candidate-as-source
/// consistency, first-arrival visited pruning, no expansion ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub consistency: ConsistencyCheck,
    pub visited: VisitedPolicy,
    /// Stop after this many expansions without a solution
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_consistency(mut self, consistency: ConsistencyCheck) -> Self {
        self.consistency = consistency;
        self
    }

    #[must_use]
    pub const fn with_visited(mut self, visited: VisitedPolicy) -> Self {
        self.visited = visited;
        self
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}
