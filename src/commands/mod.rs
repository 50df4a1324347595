//! Command implementations

pub mod batch;

pub use batch::{
    BatchError, BatchOptions, BatchStats, BatchSummary, GameRecord, InvalidRecord, parse_record,
    solve_file, solve_records,
};
