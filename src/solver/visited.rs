//! Closed set of the best-first search

use crate::core::{History, Word};
use rustc_hash::FxHashSet;
use std::rc::Rc;

/// How already-expanded states are recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitedPolicy {
    /// A word is expanded at most once, whichever path reaches it first.
    /// Later nodes naming the same word are discarded, even with a more
    /// informative history.
    #[default]
    FirstArrivalWins,
    /// States are keyed by word and path. A path never repeats a guess, but
    /// the same word may be expanded once per distinct path.
    PerPath,
}

impl VisitedPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstArrivalWins => "first-arrival",
            Self::PerPath => "per-path",
        }
    }
}

/// Set of expanded states under a [`VisitedPolicy`]
#[derive(Debug)]
pub struct VisitedSet<'a> {
    policy: VisitedPolicy,
    words: FxHashSet<&'a Word>,
    paths: FxHashSet<(&'a Word, Rc<History>)>,
}

impl<'a> VisitedSet<'a> {
    #[must_use]
    pub fn new(policy: VisitedPolicy) -> Self {
        Self {
            policy,
            words: FxHashSet::default(),
            paths: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> VisitedPolicy {
        self.policy
    }

    /// Check whether a popped node was already expanded
    #[must_use]
    pub fn contains(&self, word: &'a Word, history: &Rc<History>) -> bool {
        match self.policy {
            VisitedPolicy::FirstArrivalWins => self.words.contains(word),
            VisitedPolicy::PerPath => self.paths.contains(&(word, Rc::clone(history))),
        }
    }

    /// Mark a node as expanded
    ///
    /// Returns false if it was already present.
    pub fn insert(&mut self, word: &'a Word, history: &Rc<History>) -> bool {
        match self.policy {
            VisitedPolicy::FirstArrivalWins => self.words.insert(word),
            VisitedPolicy::PerPath => self.paths.insert((word, Rc::clone(history))),
        }
    }

    /// Check whether `candidate` must be skipped when expanding a node whose
    /// extended history is `path`
    #[must_use]
    pub fn excludes(&self, candidate: &Word, path: &History) -> bool {
        match self.policy {
            VisitedPolicy::FirstArrivalWins => self.words.contains(candidate),
            VisitedPolicy::PerPath => path.contains_guess(candidate),
        }
    }

    /// Number of expanded states
    #[must_use]
    pub fn len(&self) -> usize {
        match self.policy {
            VisitedPolicy::FirstArrivalWins => self.words.len(),
            VisitedPolicy::PerPath => self.paths.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
