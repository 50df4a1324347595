//! Hangman pattern representation and matching
//!
//! A pattern is the revealed state of a word: each cell is either a literal
//! letter or the wildcard `*`. The wildcard is the only special symbol, every
//! other character is matched literally.

use super::{Word, normalize};
use std::fmt;

/// Placeholder for an unrevealed position
pub const WILDCARD: char = '*';

/// Partially revealed word
///
/// `None` cells are unknown positions. Cells only go from `None` to `Some`
/// during a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<char>>,
}

impl Pattern {
    /// Parse a pattern from text, normalizing it like dictionary words
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::new(" ST**A ");
    /// assert_eq!(pattern.to_string(), "st**a");
    /// assert_eq!(pattern.unknown_positions(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let cells = normalize(text)
            .chars()
            .map(|ch| (ch != WILDCARD).then_some(ch))
            .collect();
        Self { cells }
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when no wildcard is left
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Positions still hidden, left to right
    #[must_use]
    pub fn unknown_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    /// The revealed letters only, with wildcards dropped
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// assert_eq!(Pattern::new("c*s*").stripped(), "cs");
    /// ```
    #[must_use]
    pub fn stripped(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Build a matcher that accepts words consistent with this pattern
    #[must_use]
    pub fn compile(&self) -> Matcher {
        let literals = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|ch| (i, ch)))
            .collect();

        Matcher {
            len: self.cells.len(),
            literals,
        }
    }

    /// Fill every position where `target` has `letter`
    ///
    /// Returns a new pattern; revealing a letter twice is a no-op. The
    /// wildcard itself can never be revealed, so a target containing `*`
    /// keeps those positions hidden.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let target = Word::new("strat").unwrap();
    /// let pattern = Pattern::new("s****").reveal(&target, 't');
    /// assert_eq!(pattern.to_string(), "st**t");
    /// ```
    #[must_use]
    pub fn reveal(&self, target: &Word, letter: char) -> Self {
        let mut cells = self.cells.clone();
        if letter == WILDCARD {
            return Self { cells };
        }
        for &i in target.positions_of(letter) {
            if let Some(cell) = cells.get_mut(i) {
                *cell = Some(letter);
            }
        }
        Self { cells }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

/// Compiled predicate over fixed-length words
#[derive(Debug, Clone)]
pub struct Matcher {
    len: usize,
    literals: Vec<(usize, char)>,
}

impl Matcher {
    /// Check a word against every revealed position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len
            && self
                .literals
                .iter()
                .all(|&(i, ch)| word.char_at(i) == Some(ch))
    }
}
