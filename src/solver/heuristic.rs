//! Cost estimators guiding the frontier order
//!
//! Defines the Heuristic trait and concrete implementations. Lower estimates
//! are more promising. Estimators are not required to be admissible; they
//! only shape exploration order.

use crate::core::{History, Word};
use rustc_hash::FxHashSet;

/// Information available to a heuristic when pricing a candidate
#[derive(Debug, Clone, Copy)]
pub struct EstimateContext<'c> {
    /// The word being searched for
    pub secret: &'c Word,
    /// The history the candidate would extend
    pub history: &'c History,
}

/// A scoring strategy for frontier candidates
pub trait Heuristic {
    /// Estimated remaining cost for `word`, lower is better
    fn estimate(&self, word: &Word, context: &EstimateContext<'_>) -> usize;

    /// Short label used in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all heuristic types
///
/// Allows runtime selection of the heuristic while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum HeuristicType {
    /// Weighted letter similarity against the secret (A*)
    Similarity(LetterSimilarity),
    /// Constant zero estimate (uniform-cost search)
    Uniform(Uniform),
}

impl Heuristic for HeuristicType {
    fn estimate(&self, word: &Word, context: &EstimateContext<'_>) -> usize {
        match self {
            Self::Similarity(h) => h.estimate(word, context),
            Self::Uniform(h) => h.estimate(word, context),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Similarity(h) => h.name(),
            Self::Uniform(h) => h.name(),
        }
    }
}

impl Default for HeuristicType {
    fn default() -> Self {
        Self::Similarity(LetterSimilarity::default())
    }
}

/// Weights applied to the three letter-similarity terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityWeights {
    pub positional_mismatch: usize,
    pub foreign_letters: usize,
    pub frequency_imbalance: usize,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            positional_mismatch: 2,
            foreign_letters: 3,
            frequency_imbalance: 1,
        }
    }
}

/// Unweighted letter-similarity terms for one word against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityBreakdown {
    /// Positions where the letters differ
    pub positional_mismatch: usize,
    /// Letter occurrences whose letter never appears in the secret
    pub foreign_letters: usize,
    /// Sum over all letters of the difference in occurrence counts
    pub frequency_imbalance: usize,
}

impl SimilarityBreakdown {
    /// Weighted total
    #[must_use]
    pub const fn score(&self, weights: &SimilarityWeights) -> usize {
        weights.positional_mismatch * self.positional_mismatch
            + weights.foreign_letters * self.foreign_letters
            + weights.frequency_imbalance * self.frequency_imbalance
    }
}

/// Oracle heuristic scoring a word's letter-level similarity to the secret
///
/// This consults the true secret, so it is privileged guidance rather than
/// an estimate derived from observed clues.
#[derive(Debug, Clone, Default)]
pub struct LetterSimilarity {
    pub weights: SimilarityWeights,
}

impl LetterSimilarity {
    #[must_use]
    pub const fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    /// Compute the raw terms for `word` against `secret`
    ///
    /// # Examples
    /// ```
    /// use astar_wordle::core::Word;
    /// use astar_wordle::solver::LetterSimilarity;
    ///
    /// let word = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let terms = LetterSimilarity::breakdown(&word, &secret);
    ///
    /// assert_eq!(terms.positional_mismatch, 3); // c/s, r/l, n/t
    /// assert_eq!(terms.foreign_letters, 3); // c, r, n
    /// assert_eq!(terms.frequency_imbalance, 6);
    /// ```
    #[must_use]
    pub fn breakdown(word: &Word, secret: &Word) -> SimilarityBreakdown {
        let positional_mismatch = word
            .letters()
            .iter()
            .zip(secret.letters())
            .filter(|(w, s)| w != s)
            .count();

        let word_counts = word.letter_counts();
        let secret_counts = secret.letter_counts();

        let foreign_letters = word_counts
            .iter()
            .filter(|(letter, _)| !secret_counts.contains_key(*letter))
            .map(|(_, &count)| count)
            .sum();

        let letters: FxHashSet<u8> = word_counts
            .keys()
            .chain(secret_counts.keys())
            .copied()
            .collect();
        let frequency_imbalance = letters
            .iter()
            .map(|letter| {
                let in_word = word_counts.get(letter).copied().unwrap_or(0);
                let in_secret = secret_counts.get(letter).copied().unwrap_or(0);
                in_word.abs_diff(in_secret)
            })
            .sum();

        SimilarityBreakdown {
            positional_mismatch,
            foreign_letters,
            frequency_imbalance,
        }
    }
}

impl Heuristic for LetterSimilarity {
    fn estimate(&self, word: &Word, context: &EstimateContext<'_>) -> usize {
        Self::breakdown(word, context.secret).score(&self.weights)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

/// Zero estimate: the frontier is ordered by path cost alone
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Heuristic for Uniform {
    fn estimate(&self, _word: &Word, _context: &EstimateContext<'_>) -> usize {
        0
    }

    fn name(&self) -> &'static str {
        "UCS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_with<H: Heuristic>(heuristic: &H, word: &str, secret: &str) -> usize {
        let word = Word::new(word).unwrap();
        let secret = Word::new(secret).unwrap();
        let history = History::new();
        let context = EstimateContext {
            secret: &secret,
            history: &history,
        };
        heuristic.estimate(&word, &context)
    }

    #[test]
    fn secret_scores_zero() {
        let h = LetterSimilarity::default();
        for word in ["eagle", "llama", "aaron"] {
            assert_eq!(estimate_with(&h, word, word), 0);
        }
    }

    #[test]
    fn weighted_terms() {
        let h = LetterSimilarity::default();
        // 2*3 + 3*3 + 1*6
        assert_eq!(estimate_with(&h, "crane", "slate"), 21);
    }

    #[test]
    fn repeated_letters_counted_per_occurrence() {
        let word = Word::new("llama").unwrap();
        let secret = Word::new("allow").unwrap();
        let terms = LetterSimilarity::breakdown(&word, &secret);

        assert_eq!(terms.positional_mismatch, 4);
        assert_eq!(terms.foreign_letters, 1); // m
        assert_eq!(terms.frequency_imbalance, 4); // a, m, o, w
        assert_eq!(terms.score(&SimilarityWeights::default()), 15);
    }

    #[test]
    fn custom_weights() {
        let h = LetterSimilarity::new(SimilarityWeights {
            positional_mismatch: 1,
            foreign_letters: 0,
            frequency_imbalance: 0,
        });
        assert_eq!(estimate_with(&h, "crane", "slate"), 3);
    }

    #[test]
    fn closer_words_score_lower() {
        let h = LetterSimilarity::default();
        let near = estimate_with(&h, "angle", "eagle");
        let far = estimate_with(&h, "aaron", "eagle");
        assert!(near < far);
    }

    #[test]
    fn uniform_is_always_zero() {
        assert_eq!(estimate_with(&Uniform, "crane", "slate"), 0);
        assert_eq!(estimate_with(&Uniform, "aaron", "eagle"), 0);
    }

    #[test]
    fn heuristic_type_dispatches() {
        assert_eq!(HeuristicType::default().name(), "A*");
        assert_eq!(HeuristicType::Uniform(Uniform).name(), "UCS");
        assert_eq!(
            estimate_with(&HeuristicType::default(), "crane", "slate"),
            21
        );
        assert_eq!(
            estimate_with(&HeuristicType::Uniform(Uniform), "crane", "slate"),
            0
        );
    }
}
