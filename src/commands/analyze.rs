//! Word analysis command
//!
//! Breaks down the heuristic score of a word against a secret and shows the
//! clue in both comparison directions.

use crate::core::{Clue, Word};
use crate::solver::{LetterSimilarity, SimilarityBreakdown, SimilarityWeights};

/// Result of analyzing a word against a secret
pub struct AnalysisResult {
    pub word: Word,
    pub secret: Word,
    /// `word` compared against `secret`, as the engine scores a guess
    pub clue: Clue,
    /// `secret` compared against `word`
    pub reverse_clue: Clue,
    pub breakdown: SimilarityBreakdown,
    pub weights: SimilarityWeights,
    pub estimate: usize,
}

impl AnalysisResult {
    /// True when both comparison directions give the same clue
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.clue == self.reverse_clue
    }
}

/// Analyze `word` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn analyze_word(
    word: &str,
    secret: &str,
    weights: SimilarityWeights,
) -> Result<AnalysisResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;

    if word.len() != secret.len() {
        return Err(format!(
            "'{word}' has {} letters but '{secret}' has {}",
            word.len(),
            secret.len()
        ));
    }

    let breakdown = LetterSimilarity::breakdown(&word, &secret);

    Ok(AnalysisResult {
        clue: Clue::calculate(&word, &secret),
        reverse_clue: Clue::calculate(&secret, &word),
        estimate: breakdown.score(&weights),
        breakdown,
        weights,
        word,
        secret,
    })
}
