//! Hangman Solver
//!
//! An offline Hangman solver that guesses the most frequent unrevealed letter
//! among the dictionary words still consistent with the revealed pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::solver::{Solver, Status};
//!
//! let solver = Solver::new(["stomac", "stofa", "strat"]);
//! let result = solver.solve_one("1", "st***", "strat");
//!
//! assert_eq!(result.found_word, "strat");
//! assert_eq!(result.status, Status::Ok);
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
