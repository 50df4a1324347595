//! Hangman word representation
//!
//! A Word stores a normalized dictionary entry as characters, along with
//! letter position indices for revealing guesses.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize raw text the way every word, pattern and target is normalized
///
/// Trims surrounding whitespace and lower-cases. Diacritics are kept as
/// distinct letters, so `ș` never collapses into `s`.
///
/// # Examples
/// ```
/// use hangman_solver::core::normalize;
///
/// assert_eq!(normalize("  Școală\n"), "școală");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A normalized word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty after normalization"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw text
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new(" Stomac ").unwrap();
    /// assert_eq!(word.text(), "stomac");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self::from_normalized(text))
    }

    /// Build a word from text that is already normalized, without validation
    pub(crate) fn from_normalized(text: String) -> Self {
        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            chars,
            char_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters, not bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a position, if any
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
