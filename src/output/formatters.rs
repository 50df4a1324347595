//! Formatting utilities for terminal output

use crate::solver::Status;
use colored::{ColoredString, Colorize};

/// Status colored green for `OK`, red for `FAIL`
#[must_use]
pub fn format_status(status: Status) -> ColoredString {
    match status {
        Status::Ok => status.as_str().green().bold(),
        Status::Fail => status.as_str().red().bold(),
    }
}

/// Yes/no flag colored the same way as statuses
#[must_use]
pub fn format_flag(value: bool) -> ColoredString {
    let text = if value { "True" } else { "False" };
    if value { text.green() } else { text.red() }
}

/// Mean attempts per game, zero when nothing was solved
#[must_use]
pub fn average_attempts(sum_attempts: usize, games: usize) -> f64 {
    if games == 0 {
        0.0
    } else {
        sum_attempts as f64 / games as f64
    }
}
