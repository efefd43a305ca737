//! Open set of the best-first search
//!
//! A min-priority queue of [`FrontierNode`]s. Ties on priority are broken by
//! the word's lexicographic order, then by insertion sequence, so the pop
//! order is total and deterministic.

use crate::core::{History, Word};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

/// A candidate state waiting to be expanded
#[derive(Debug, Clone)]
pub struct FrontierNode<'a> {
    /// Path cost plus heuristic estimate
    pub priority: usize,
    /// The word this node would guess
    pub word: &'a Word,
    /// Steps taken before guessing `word`, shared with sibling nodes
    pub history: Rc<History>,
    sequence: u64,
}

impl FrontierNode<'_> {
    /// Insertion sequence number, unique within one frontier
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl PartialEq for FrontierNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode<'_> {}

impl PartialOrd for FrontierNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.word.cmp(other.word))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-queue of frontier nodes
#[derive(Debug, Default)]
pub struct Frontier<'a> {
    heap: BinaryHeap<Reverse<FrontierNode<'a>>>,
    next_sequence: u64,
}

impl<'a> Frontier<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Add a node, stamping it with the next sequence number
    pub fn push(&mut self, priority: usize, word: &'a Word, history: Rc<History>) {
        let node = FrontierNode {
            priority,
            word,
            history,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(node));
    }

    /// Remove and return the lowest-ordered node
    pub fn pop(&mut self) -> Option<FrontierNode<'a>> {
        self.heap.pop().map(|Reverse(node)| node)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of nodes ever pushed
    #[inline]
    #[must_use]
    pub const fn pushed(&self) -> u64 {
        self.next_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn pops_lowest_priority_first() {
        let w = words(&["apple", "angle", "eagle"]);
        let history = Rc::new(History::new());
        let mut frontier = Frontier::new();

        frontier.push(9, &w[0], Rc::clone(&history));
        frontier.push(3, &w[1], Rc::clone(&history));
        frontier.push(5, &w[2], Rc::clone(&history));

        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.word.text())
            .collect();
        assert_eq!(order, ["angle", "eagle", "apple"]);
    }

    #[test]
    fn ties_broken_by_word_then_sequence() {
        let w = words(&["eagle", "angle", "angle"]);
        let history = Rc::new(History::new());
        let mut frontier = Frontier::new();

        frontier.push(4, &w[0], Rc::clone(&history));
        frontier.push(4, &w[1], Rc::clone(&history));
        frontier.push(4, &w[2], Rc::clone(&history));

        let first = frontier.pop().unwrap();
        let second = frontier.pop().unwrap();
        let third = frontier.pop().unwrap();

        assert_eq!(first.word.text(), "angle");
        assert_eq!(first.sequence(), 1);
        assert_eq!(second.word.text(), "angle");
        assert_eq!(second.sequence(), 2);
        assert_eq!(third.word.text(), "eagle");
    }

    #[test]
    fn tracks_size_and_pushes() {
        let w = words(&["aaron"]);
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());

        frontier.push(0, &w[0], Rc::new(History::new()));
        frontier.push(1, &w[0], Rc::new(History::new()));
        assert_eq!(frontier.len(), 2);

        frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pushed(), 2);
    }
}
