//! Word lists for Hangman solving
//!
//! Dictionaries are loaded from disk once per session and handed to the
//! solver.

pub mod loader;

pub use loader::{load_from_file, words_from_reader};
