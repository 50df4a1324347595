//! Per-game outcome records

use std::fmt;

/// Whether the solver determined the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Fail,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Fail => "FAIL",
        }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal record for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub game_id: String,
    pub total_attempts: usize,
    pub found_word: String,
    pub status: Status,
    pub attempts: Vec<char>,
}

impl SolveResult {
    /// Attempts as a space separated string, e.g. `a m s`
    #[must_use]
    pub fn attempts_joined(&self) -> String {
        let mut joined = String::with_capacity(self.attempts.len() * 2);
        for (i, letter) in self.attempts.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            joined.push(*letter);
        }
        joined
    }
}
