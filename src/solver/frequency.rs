//! Letter frequency selection
//!
//! Counts letters at the unknown positions of the remaining candidates and
//! picks the most common one that hasn't been guessed yet.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter counts that remember first-seen order
///
/// Ties are broken by the order letters were first counted, so the result is
/// stable for a given candidate order.
#[derive(Debug, Default)]
pub struct LetterCounts {
    entries: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count one occurrence of `letter`
    pub fn add(&mut self, letter: char) {
        if let Some(&slot) = self.index.get(&letter) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(letter, self.entries.len());
            self.entries.push((letter, 1));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The letter with the highest count; the earliest one wins ties
    #[must_use]
    pub fn most_common(&self) -> Option<(char, usize)> {
        self.entries
            .iter()
            .fold(None, |best: Option<(char, usize)>, &(letter, count)| {
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((letter, count)),
                }
            })
    }
}

/// Tally unguessed letters at `unknown` positions across `candidates`
///
/// Candidates are visited in order and positions left to right.
#[must_use]
pub fn count_letters(
    candidates: &[&Word],
    unknown: &[usize],
    guessed: &FxHashSet<char>,
) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for word in candidates {
        for letter in unknown.iter().filter_map(|&i| word.char_at(i)) {
            if !guessed.contains(&letter) {
                counts.add(letter);
            }
        }
    }
    counts
}

/// Choose the next letter to guess, with its count
///
/// Falls back to the first unguessed letter found anywhere in the candidates
/// (count 1) when the unknown positions only hold guessed letters. Returns
/// `None` once every letter of every candidate has been guessed.
#[must_use]
pub fn select_letter(
    candidates: &[&Word],
    unknown: &[usize],
    guessed: &FxHashSet<char>,
) -> Option<(char, usize)> {
    let counts = count_letters(candidates, unknown, guessed);
    if !counts.is_empty() {
        return counts.most_common();
    }

    candidates
        .iter()
        .flat_map(|word| word.chars().iter().copied())
        .find(|letter| !guessed.contains(letter))
        .map(|letter| (letter, 1))
}
