//! Dictionary word representation
//!
//! A Word stores a lowercase ASCII word of any length up to [`MAX_WORD_LENGTH`].
//! All words taking part in one search share the same length.

use rustc_hash::FxHashMap;
use std::fmt;

/// Longest word accepted by [`Word::new`]
pub const MAX_WORD_LENGTH: usize = 32;

/// An immutable, lowercase-normalized word
///
/// Words compare and order by their text, which gives the frontier its
/// lexicographic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must have between 1 and {MAX_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty or longer than [`MAX_WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use astar_wordle::core::Word;
    ///
    /// let word = Word::new("EAGLE").unwrap();
    /// assert_eq!(word.text(), "eagle");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as letter bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("aaron").unwrap();
        assert_eq!(word.text(), "aaron");
        assert_eq!(word.letters(), b"aaron");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("bridge").unwrap().len(), 6);
        assert!(Word::new("a".repeat(MAX_WORD_LENGTH)).is_ok());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("EAGLE").unwrap();
        assert_eq!(word.text(), "eagle");

        let word2 = Word::new("EaGlE").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::InvalidLength(33))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cranë"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at_and_has_letter() {
        let word = Word::new("angle").unwrap();
        assert_eq!(word.letter_at(0), b'a');
        assert_eq!(word.letter_at(4), b'e');
        assert!(word.has_letter(b'g'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("llama").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'a'), Some(&2));
        assert_eq!(counts.get(&b'm'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("eagle").unwrap(),
            Word::new("aaron").unwrap(),
            Word::new("angle").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["aaron", "angle", "eagle"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("apple").unwrap();
        assert_eq!(format!("{word}"), "apple");
    }
}
