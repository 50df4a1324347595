//! Hangman solving
//!
//! Candidate filtering, letter selection and guess feedback.

mod engine;
pub mod frequency;
pub mod oracle;
mod result;

pub use engine::{Game, Solver};
pub use oracle::{Oracle, TargetOracle};
pub use result::{SolveResult, Status};
