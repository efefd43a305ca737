//! Word lists for the solver
//!
//! Provides an embedded dictionary compiled into the binary and loaders for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
