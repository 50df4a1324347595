//! Guess feedback
//!
//! An oracle answers whether a guessed letter is in the hidden word and, if
//! so, where. Offline grading uses the known target; a live game would put a
//! remote judge behind the same trait.

use crate::core::{Pattern, Word};

/// Source of truth for guessed letters
pub trait Oracle {
    /// Reveal `letter` in `pattern`
    ///
    /// Returns the updated pattern, or `None` if the letter is not present.
    fn reveal(&mut self, pattern: &Pattern, letter: char) -> Option<Pattern>;
}

/// Oracle backed by a known target word
#[derive(Debug, Clone)]
pub struct TargetOracle {
    target: Word,
}

impl TargetOracle {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl Oracle for TargetOracle {
    fn reveal(&mut self, pattern: &Pattern, letter: char) -> Option<Pattern> {
        self.target
            .has_letter(letter)
            .then(|| pattern.reveal(&self.target, letter))
    }
}
