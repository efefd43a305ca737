//! Per-letter feedback (clue) calculation and representation
//!
//! A clue classifies each letter of a word against a reference word:
//! - `G` = Exact (letter in the correct position)
//! - `Y` = Present (letter elsewhere in the reference, subject to multiplicity)
//! - `B` = Absent
//!
//! Clues are not symmetric: comparing A against B may differ from comparing
//! B against A.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Letter used in the textual clue form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Coloured square used in the emoji clue form
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single mark
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `B`/`b`/`-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when parsing a clue string fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    Empty,
    InvalidMark(char),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Clue must contain at least one mark"),
            Self::InvalidMark(ch) => write!(f, "Invalid clue mark '{ch}'"),
        }
    }
}

impl std::error::Error for ClueError {}

/// Feedback for a whole word, one mark per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clue(Box<[Mark]>);

impl Clue {
    /// Compute the clue for `source` compared against `reference`
    ///
    /// Exact matches are credited first and consume their letter from the
    /// reference; remaining letters are then credited Present only while the
    /// reference still has an unconsumed instance of that letter. Excess
    /// repeats are Absent.
    ///
    /// # Examples
    /// ```
    /// use astar_wordle::core::{Clue, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let secret = Word::new("allow").unwrap();
    ///
    /// assert_eq!(Clue::calculate(&guess, &secret).to_string(), "YGYBB");
    /// ```
    #[must_use]
    pub fn calculate(source: &Word, reference: &Word) -> Self {
        let mut marks = vec![Mark::Absent; source.len()];
        let mut remaining = reference.letter_counts();

        // First pass: exact position matches
        for (i, (&s, &r)) in source.letters().iter().zip(reference.letters()).enumerate() {
            if s == r {
                marks[i] = Mark::Exact;
                if let Some(count) = remaining.get_mut(&s) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, limited by what is left
        for (i, &s) in source.letters().iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&s)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks.into_boxed_slice())
    }

    /// The marks, in letter order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the clue has no marks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every mark is Exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the number of Exact marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of Present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert clue to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &*self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Clue {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .map(|ch| Mark::from_char(ch).ok_or(ClueError::InvalidMark(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() {
            return Err(ClueError::Empty);
        }

        Ok(Self(marks.into_boxed_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(source: &str, reference: &str) -> String {
        let source = Word::new(source).unwrap();
        let reference = Word::new(reference).unwrap();
        Clue::calculate(&source, &reference).to_string()
    }

    #[test]
    fn clue_all_absent() {
        assert_eq!(clue("abcde", "fghij"), "BBBBB");
    }

    #[test]
    fn clue_self_match_is_perfect() {
        for word in ["aaron", "eagle", "llama", "zzzzz", "cat", "bridge"] {
            let w = Word::new(word).unwrap();
            let c = Clue::calculate(&w, &w);
            assert!(c.is_perfect(), "{word} against itself gave {c}");
            assert_eq!(c.count_exact(), w.len());
        }
    }

    #[test]
    fn clue_excess_repeats_are_absent() {
        // ALLOW has two Ls and one A: both Ls credited, second A is Absent
        assert_eq!(clue("llama", "allow"), "YGYBB");
    }

    #[test]
    fn clue_exact_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is exact, first O present
        assert_eq!(clue("robot", "floor"), "YYBGB");
    }

    #[test]
    fn clue_duplicate_letters_in_source() {
        // ERASE has two Es, so both Es in SPEED are credited
        assert_eq!(clue("speed", "erase"), "YBYYB");
    }

    #[test]
    fn clue_is_not_symmetric() {
        assert_eq!(clue("abcde", "xaxxx"), "YBBBB");
        assert_eq!(clue("xaxxx", "abcde"), "BYBBB");
    }

    #[test]
    fn clue_never_overcredits_a_letter() {
        let words = ["llama", "allow", "eagle", "speed", "erase", "aaron", "geese"];
        for a in words {
            for b in words {
                let source = Word::new(a).unwrap();
                let reference = Word::new(b).unwrap();
                let c = Clue::calculate(&source, &reference);
                let available = reference.letter_counts();

                for (letter, &count) in &available {
                    let credited = source
                        .letters()
                        .iter()
                        .zip(c.marks())
                        .filter(|&(l, m)| l == letter && *m != Mark::Absent)
                        .count();
                    assert!(credited <= count, "{a} vs {b} credits too many {letter}");
                }
            }
        }
    }

    #[test]
    fn clue_counts() {
        let c: Clue = "GYBGY".parse().unwrap();
        assert_eq!(c.count_exact(), 2);
        assert_eq!(c.count_present(), 2);
        assert!(!c.is_perfect());
    }

    #[test]
    fn clue_from_str_accepts_all_notations() {
        let c1: Clue = "GYB-_".parse().unwrap();
        let c2: Clue = "gybbb".parse().unwrap();
        let c3: Clue = "🟩🟨⬜⬛⬜".parse().unwrap();
        assert_eq!(c1, c2);
        assert_eq!(c1, c3);
        assert_eq!(c1.to_string(), "GYBBB");
    }

    #[test]
    fn clue_from_str_invalid() {
        assert_eq!("".parse::<Clue>(), Err(ClueError::Empty));
        assert_eq!("GXB".parse::<Clue>(), Err(ClueError::InvalidMark('X')));
    }

    #[test]
    fn clue_to_emoji() {
        let c: Clue = "GYB".parse().unwrap();
        assert_eq!(c.to_emoji(), "🟩🟨⬜");
    }
}
