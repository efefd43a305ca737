//! Run statistics for one search

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Mutable statistics owned by an in-progress search
#[derive(Debug)]
pub(crate) struct StatsRecorder {
    secret: String,
    started: Instant,
    expanded: Vec<String>,
    max_frontier: usize,
    max_memory: usize,
}

impl StatsRecorder {
    pub(crate) fn start(secret: &Word) -> Self {
        Self {
            secret: secret.text().to_string(),
            started: Instant::now(),
            expanded: Vec::new(),
            max_frontier: 0,
            max_memory: 0,
        }
    }

    pub(crate) fn observe_frontier(&mut self, frontier_len: usize) {
        self.max_frontier = self.max_frontier.max(frontier_len);
    }

    pub(crate) fn record_expansion(&mut self, word: &Word, visited_len: usize, frontier_len: usize) {
        self.expanded.push(word.text().to_string());
        self.max_memory = self.max_memory.max(visited_len + frontier_len);
    }

    pub(crate) fn expansions(&self) -> usize {
        self.expanded.len()
    }

    pub(crate) fn finish(self, nodes_generated: u64) -> RunStats {
        RunStats {
            secret: self.secret,
            expanded: self.expanded,
            max_frontier: self.max_frontier,
            max_memory: self.max_memory,
            nodes_generated,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Finalized statistics of one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    secret: String,
    expanded: Vec<String>,
    max_frontier: usize,
    max_memory: usize,
    nodes_generated: u64,
    elapsed: Duration,
}

impl RunStats {
    /// The secret the run searched for
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Expanded words in expansion order
    #[must_use]
    pub fn expanded_nodes(&self) -> &[String] {
        &self.expanded
    }

    /// Total number of expansions
    #[must_use]
    pub fn expansions(&self) -> usize {
        self.expanded.len()
    }

    /// Largest frontier observed before a pop
    #[must_use]
    pub const fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    /// Largest visited + frontier size observed after an expansion began
    #[must_use]
    pub const fn max_memory(&self) -> usize {
        self.max_memory
    }

    /// Nodes pushed onto the frontier, including the start node
    #[must_use]
    pub const fn nodes_generated(&self) -> u64 {
        self.nodes_generated
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed wall-clock seconds rounded to 4 decimal places
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        round4(self.elapsed.as_secs_f64())
    }

    /// Flatten into a report row labelled with the algorithm name
    #[must_use]
    pub fn record(&self, algorithm: &str) -> StatsRecord {
        StatsRecord {
            algorithm: algorithm.to_string(),
            time: self.elapsed_secs(),
            memory: self.max_memory,
            expanded_nodes: self.expansions(),
            max_open_size: self.max_frontier,
            target: self.secret.clone(),
            list_expanded_nodes: self.expanded.join(", "),
        }
    }
}

/// One row handed to a reporting sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub algorithm: String,
    /// Seconds, rounded to 4 decimals
    pub time: f64,
    pub memory: usize,
    pub expanded_nodes: usize,
    pub max_open_size: usize,
    pub target: String,
    pub list_expanded_nodes: String,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
