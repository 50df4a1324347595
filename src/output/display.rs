//! Display functions for batch results

use super::formatters::{average_attempts, format_flag, format_status};
use crate::commands::BatchSummary;
use crate::solver::SolveResult;
use colored::Colorize;

/// Print one solved game, e.g. `[g1] **** -> masa (OK) attempts=3`
pub fn print_game_line(result: &SolveResult, pattern_initial: &str) {
    println!(
        "[{}] {} -> {} ({}) attempts={}",
        result.game_id.bright_white(),
        pattern_initial,
        result.found_word.bright_yellow(),
        format_status(result.status),
        result.total_attempts
    );
}

/// Print the end-of-run summary and any invalid line details
pub fn print_batch_summary(summary: &BatchSummary) {
    let stats = &summary.stats;

    println!("{}", "=== SUMMARY ===".bright_cyan().bold());
    println!("Valid games:   {}", stats.total_games_valid);
    if stats.total_games_invalid > 0 {
        println!("Invalid lines: {}", stats.total_games_invalid.to_string().yellow());
    } else {
        println!("Invalid lines: {}", stats.total_games_invalid);
    }
    println!("Sum attempts:  {}", stats.sum_attempts);
    println!(
        "Avg attempts:  {:.2}",
        average_attempts(stats.sum_attempts, stats.total_games_valid)
    );
    println!("All OK:        {}", format_flag(stats.all_ok));
    println!("Output CSV:    {}", summary.output_csv.display());

    if !stats.invalid_messages.is_empty() {
        println!("\n{}", "Invalid lines details:".yellow().bold());
        for message in &stats.invalid_messages {
            println!(" - {message}");
        }
    }
}
