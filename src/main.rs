//! Hangman Solver - CLI
//!
//! Solves a CSV batch of recorded Hangman games against a dictionary and
//! writes one result row per game.

use anyhow::{Context, Result};
use clap::Parser;
use hangman_solver::{
    commands::{BatchOptions, solve_file},
    logging::init_logger,
    output::print_batch_summary,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Offline Hangman solver using dictionary letter frequencies",
    version,
    author
)]
struct Cli {
    /// CSV input: game_id,pattern_initial,target_word
    #[arg(long)]
    input: PathBuf,

    /// CSV output with one result row per game
    #[arg(long)]
    output: PathBuf,

    /// Dictionary file (one word per line, UTF-8)
    #[arg(long = "dict")]
    dictionary: PathBuf,

    /// The input starts with a header line
    #[arg(long)]
    skip_header: bool,

    /// Print every game as it is solved
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl From<Cli> for BatchOptions {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            dictionary: cli.dictionary,
            skip_header: cli.skip_header,
            verbose: cli.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let options = BatchOptions::from(cli);
    let summary = solve_file(&options)
        .with_context(|| format!("failed to solve {}", options.input.display()))?;

    print_batch_summary(&summary);
    Ok(())
}
