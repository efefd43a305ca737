//! A* Wordle Solver
//!
//! Solves a Wordle-style puzzle by best-first search: each expansion scores a
//! guess against the secret, prunes dictionary words inconsistent with the
//! clues so far, and prices the survivors with a heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use astar_wordle::core::Word;
//! use astar_wordle::solver::{LetterSimilarity, SearchEngine};
//!
//! let dictionary: Vec<Word> = ["aaron", "apple", "angle", "eagle"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let engine = SearchEngine::new(LetterSimilarity::default(), &dictionary);
//! let outcome = engine.search(&dictionary[3], &dictionary[0]);
//!
//! assert!(outcome.is_solved());
//! println!("expanded {} nodes", outcome.stats.expansions());
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and reporting sinks
pub mod output;
