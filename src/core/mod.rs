//! Core domain types for the puzzle
//!
//! Words, clues and guess histories. Everything here is pure and free of
//! search state.

mod clue;
mod history;
mod word;

pub use clue::{Clue, ClueError, Mark};
pub use history::{History, HistoryEntry};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
