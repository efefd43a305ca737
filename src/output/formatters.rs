//! Formatting utilities for terminal output

use crate::core::{Clue, Word};

/// Format a word and its clue as "WORD 🟩⬜🟨⬜⬜"
#[must_use]
pub fn guess_line(word: &Word, clue: &Clue) -> String {
    format!("{} {}", word.text().to_uppercase(), clue.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one labelled bar of a statistics chart, scaled against `max`
#[must_use]
pub fn stat_bar(label: &str, value: usize, max: usize, width: usize) -> String {
    format!(
        "{label:<16} {} {value}",
        create_progress_bar(value as f64, max as f64, width)
    )
}

/// Join a list of words as upper-case, comma separated text
#[must_use]
pub fn word_list(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_line_format() {
        let word = Word::new("aaron").unwrap();
        let secret = Word::new("eagle").unwrap();
        let clue = Clue::calculate(&word, &secret);
        assert_eq!(guess_line(&word, &clue), "AARON ⬜🟩⬜⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn stat_bar_scales() {
        assert_eq!(stat_bar("Expanded", 2, 4, 4), "Expanded         ██░░ 2");
    }

    #[test]
    fn word_list_joins() {
        let words = vec!["aaron".to_string(), "eagle".to_string()];
        assert_eq!(word_list(&words), "AARON, EAGLE");
    }
}
