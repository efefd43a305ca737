//! Guess history along one search path

use super::{Clue, Word};

/// One step already taken: the guessed word and the clue it received
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HistoryEntry {
    pub guess: Word,
    pub clue: Clue,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(guess: Word, clue: Clue) -> Self {
        Self { guess, clue }
    }
}

/// Ordered, append-only sequence of history entries
///
/// Histories are values: [`History::extended`] returns a new history and
/// leaves the original untouched, so sibling paths never observe each
/// other's steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A copy of this history with one more entry at the end
    #[must_use]
    pub fn extended(&self, guess: Word, clue: Clue) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(HistoryEntry::new(guess, clue));
        Self { entries }
    }

    /// Number of guesses made so far (the path cost)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Guessed words in the order they were made
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.guess)
    }

    /// Check whether `word` was already guessed on this path
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.guesses().any(|guess| guess == word)
    }
}

impl FromIterator<HistoryEntry> for History {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
