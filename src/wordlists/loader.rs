//! Dictionary loading utilities
//!
//! Dictionaries are plain UTF-8 text, one word per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and blank lines skipped. Normalization happens when the
/// words are handed to the solver.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    words_from_reader(BufReader::new(file))
}

/// Load words from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading fails or a line is not valid UTF-8.
pub fn words_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }
    Ok(words)
}
