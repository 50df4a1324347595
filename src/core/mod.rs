//! Core domain types for Hangman
//!
//! Words, patterns and pattern matching. Everything here is pure and
//! independent of I/O.

mod pattern;
mod word;

pub use pattern::{Matcher, Pattern, WILDCARD};
pub use word::{Word, WordError, normalize};
