//! Word solving command
//!
//! Solves a specific secret word and returns the guess path with its run
//! statistics.

use crate::core::{Clue, Word};
use crate::solver::{Heuristic, SearchEngine, SearchOutcome};

/// Start word used when none is given and it exists in the dictionary
pub const DEFAULT_START: &str = "aaron";

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Opening guess; falls back to [`default_start`]
    pub start: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            start: None,
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: Option<String>) -> Self {
        self.start = start;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub start: Word,
    /// Label of the heuristic that drove the search
    pub algorithm: &'static str,
    pub steps: Vec<GuessStep>,
    pub outcome: SearchOutcome,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// A single guess in the solution path
pub struct GuessStep {
    pub word: Word,
    pub clue: Clue,
}

/// Pick the opening guess for a dictionary
///
/// Prefers [`DEFAULT_START`], otherwise the first dictionary word.
#[must_use]
pub fn default_start(dictionary: &[Word]) -> Option<&Word> {
    dictionary
        .iter()
        .find(|w| w.text() == DEFAULT_START)
        .or_else(|| dictionary.first())
}

/// Parse an explicit start word or choose the default one
///
/// # Errors
///
/// Returns an error if the dictionary is empty, the given word is invalid,
/// or its length differs from the dictionary's.
pub fn resolve_start(start: Option<&str>, dictionary: &[Word]) -> Result<Word, String> {
    let expected = dictionary
        .first()
        .map(Word::len)
        .ok_or_else(|| "Dictionary is empty".to_string())?;

    let Some(text) = start else {
        return default_start(dictionary)
            .cloned()
            .ok_or_else(|| "Dictionary is empty".to_string());
    };

    let word = Word::new(text).map_err(|e| format!("Invalid start word: {e}"))?;
    if word.len() != expected {
        return Err(format!(
            "Start word '{word}' has {} letters but the dictionary uses {expected}",
            word.len()
        ));
    }
    Ok(word)
}

/// Solve a specific word using the given engine
///
/// # Errors
///
/// Returns an error if:
/// - The secret or start word is invalid
/// - The dictionary is empty
/// - The secret, start word and dictionary do not share one length
pub fn solve_word<H: Heuristic>(
    config: SolveConfig,
    engine: &SearchEngine<H>,
) -> Result<SolveResult, String> {
    let secret = Word::new(&config.secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let dictionary = engine.dictionary();

    let expected = dictionary
        .first()
        .map(Word::len)
        .ok_or_else(|| "Dictionary is empty".to_string())?;
    if secret.len() != expected {
        return Err(format!(
            "Secret '{secret}' has {} letters but the dictionary uses {expected}",
            secret.len()
        ));
    }

    let start = resolve_start(config.start.as_deref(), dictionary)?;

    let outcome = engine.search(&secret, &start);

    let steps = outcome
        .path
        .iter()
        .map(|word| GuessStep {
            word: word.clone(),
            clue: Clue::calculate(word, &secret),
        })
        .collect();

    Ok(SolveResult {
        algorithm: engine.heuristic().name(),
        secret,
        start,
        steps,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ConsistencyCheck, LetterSimilarity, SearchConfig};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::{with_length, words_from_slice};

    fn example_dictionary() -> Vec<Word> {
        words_from_slice(&["aaron", "apple", "angle", "eagle"])
    }

    #[test]
    fn solve_example_scenario() {
        let dictionary = example_dictionary();
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);

        let result = solve_word(SolveConfig::new("EAGLE".to_string()), &engine).unwrap();

        assert!(result.success());
        assert_eq!(result.start.text(), "aaron");
        assert_eq!(result.algorithm, "A*");
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].clue.to_string(), "BGBBB");
        assert!(result.steps[1].clue.is_perfect());
    }

    #[test]
    fn solve_with_embedded_dictionary() {
        let dictionary = with_length(words_from_slice(WORDS), 5);
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary).with_config(
            SearchConfig::default().with_consistency(ConsistencyCheck::CandidateAsSecret),
        );

        let result = solve_word(SolveConfig::new("eagle".to_string()), &engine).unwrap();

        assert!(result.success());
        assert_eq!(result.steps.first().unwrap().word.text(), "aaron");
        assert_eq!(result.steps.last().unwrap().word.text(), "eagle");
    }

    #[test]
    fn explicit_start_word() {
        let dictionary = example_dictionary();
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);
        let config = SolveConfig::new("eagle".to_string()).with_start(Some("eagle".to_string()));

        let result = solve_word(config, &engine).unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.outcome.stats.expansions(), 1);
    }

    #[test]
    fn unreachable_secret_is_not_an_error() {
        let dictionary = words_from_slice(&["crane", "slate", "irate"]);
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);

        let result = solve_word(SolveConfig::new("grate".to_string()), &engine).unwrap();

        assert!(!result.success());
        assert!(result.steps.is_empty());
        assert_eq!(result.start.text(), "crane");
    }

    #[test]
    fn invalid_secret_returns_error() {
        let dictionary = example_dictionary();
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);

        assert!(solve_word(SolveConfig::new("e4gle".to_string()), &engine).is_err());
        assert!(solve_word(SolveConfig::new("eagles".to_string()), &engine).is_err());
    }

    #[test]
    fn start_length_mismatch_returns_error() {
        let dictionary = example_dictionary();
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);
        let config = SolveConfig::new("eagle".to_string()).with_start(Some("cat".to_string()));

        assert!(solve_word(config, &engine).is_err());
    }

    #[test]
    fn resolve_start_rejects_wrong_length() {
        let dictionary = example_dictionary();

        let err = resolve_start(Some("cat"), &dictionary).unwrap_err();
        assert!(err.contains("3 letters"), "{err}");
        assert!(resolve_start(Some("eagles"), &dictionary).is_err());
        assert_eq!(resolve_start(Some("EAGLE"), &dictionary).unwrap().text(), "eagle");
        assert_eq!(resolve_start(None, &dictionary).unwrap().text(), "aaron");
    }

    #[test]
    fn resolve_start_needs_a_dictionary() {
        assert!(resolve_start(None, &[]).is_err());
        assert!(resolve_start(Some("eagle"), &[]).is_err());
    }

    #[test]
    fn empty_dictionary_returns_error() {
        let dictionary: Vec<Word> = Vec::new();
        let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);

        assert!(solve_word(SolveConfig::new("eagle".to_string()), &engine).is_err());
    }

    #[test]
    fn default_start_prefers_aaron() {
        let dictionary = words_from_slice(&["eagle", "aaron"]);
        assert_eq!(default_start(&dictionary).unwrap().text(), "aaron");

        let without = words_from_slice(&["eagle", "angle"]);
        assert_eq!(default_start(&without).unwrap().text(), "eagle");
        assert!(default_start(&[]).is_none());
    }
}
