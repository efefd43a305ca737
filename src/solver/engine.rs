//! Best-first search over the dictionary

use super::frontier::Frontier;
use super::heuristic::{EstimateContext, Heuristic};
use super::stats::{RunStats, StatsRecorder};
use super::visited::VisitedSet;
use super::SearchConfig;
use crate::core::{Clue, History, Word};
use std::rc::Rc;
use tracing::{debug, trace};

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The secret was popped and expanded
    Solved,
    /// The frontier emptied without reaching the secret
    Exhausted,
    /// The configured expansion ceiling was hit first
    LimitReached,
}

/// Result of one search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Guesses in the order they were made, ending at the secret.
    /// Empty unless the run was solved.
    pub path: Vec<Word>,
    pub termination: Termination,
    pub stats: RunStats,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// Best-first search engine
///
/// Holds the dictionary, the heuristic and the policies. It keeps no state
/// between runs: every [`SearchEngine::search`] call owns a fresh visited
/// set, frontier and statistics recorder.
pub struct SearchEngine<'a, H: Heuristic> {
    heuristic: H,
    dictionary: &'a [Word],
    config: SearchConfig,
}

/// State owned by a single run
struct SearchRun<'s> {
    visited: VisitedSet<'s>,
    frontier: Frontier<'s>,
    stats: StatsRecorder,
}

impl SearchRun<'_> {
    fn finish(self, termination: Termination, path: Vec<Word>) -> SearchOutcome {
        let stats = self.stats.finish(self.frontier.pushed());
        debug!(
            secret = stats.secret(),
            expansions = stats.expansions(),
            max_frontier = stats.max_frontier(),
            max_memory = stats.max_memory(),
            ?termination,
            "search finished"
        );
        SearchOutcome {
            path,
            termination,
            stats,
        }
    }
}

impl<'a, H: Heuristic> SearchEngine<'a, H> {
    /// Create an engine with the default [`SearchConfig`]
    pub fn new(heuristic: H, dictionary: &'a [Word]) -> Self {
        Self {
            heuristic,
            dictionary,
            config: SearchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn heuristic(&self) -> &H {
        &self.heuristic
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search for `secret` starting from `start`
    ///
    /// All words must share the secret's length. The returned path is empty
    /// when the frontier is exhausted or the expansion ceiling is reached.
    ///
    /// # Examples
    /// ```
    /// use astar_wordle::core::Word;
    /// use astar_wordle::solver::{LetterSimilarity, SearchEngine};
    ///
    /// let dictionary: Vec<Word> = ["aaron", "apple", "angle", "eagle"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);
    ///
    /// let outcome = engine.search(&dictionary[3], &dictionary[0]);
    /// let path: Vec<&str> = outcome.path.iter().map(Word::text).collect();
    /// assert_eq!(path, ["aaron", "eagle"]);
    /// ```
    pub fn search<'s>(&'s self, secret: &Word, start: &'s Word) -> SearchOutcome {
        let mut run = SearchRun {
            visited: VisitedSet::new(self.config.visited),
            frontier: Frontier::new(),
            stats: StatsRecorder::start(secret),
        };
        run.frontier.push(0, start, Rc::new(History::new()));

        while !run.frontier.is_empty() {
            run.stats.observe_frontier(run.frontier.len());
            let Some(node) = run.frontier.pop() else {
                break;
            };

            if run.visited.contains(node.word, &node.history) {
                continue;
            }

            if let Some(limit) = self.config.max_expansions
                && run.stats.expansions() >= limit
            {
                return run.finish(Termination::LimitReached, Vec::new());
            }

            run.visited.insert(node.word, &node.history);
            run.stats
                .record_expansion(node.word, run.visited.len(), run.frontier.len());

            let clue = Clue::calculate(node.word, secret);
            debug!(
                word = node.word.text(),
                clue = %clue,
                priority = node.priority,
                depth = node.history.len(),
                "expanding"
            );
            let path = Rc::new(node.history.extended(node.word.clone(), clue));

            if node.word == secret {
                let guesses = path.guesses().cloned().collect();
                return run.finish(Termination::Solved, guesses);
            }

            self.expand(&mut run, secret, &path);
        }

        run.finish(Termination::Exhausted, Vec::new())
    }

    /// Push every surviving dictionary word as a child of `path`
    fn expand<'s>(&'s self, run: &mut SearchRun<'s>, secret: &Word, path: &Rc<History>) {
        let context = EstimateContext {
            secret,
            history: path,
        };
        let path_cost = path.len();
        let before = run.frontier.len();

        for candidate in self.dictionary {
            if run.visited.excludes(candidate, path)
                || !self.config.consistency.is_consistent(candidate, path)
            {
                continue;
            }
            let priority = path_cost + self.heuristic.estimate(candidate, &context);
            run.frontier.push(priority, candidate, Rc::clone(path));
        }

        trace!(pushed = run.frontier.len() - before, "expanded");
    }
}
