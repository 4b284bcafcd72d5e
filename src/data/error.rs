//! Errors raised while loading or validating game tables

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tables: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize tables: {0}")]
    Serialize(#[from] ron::Error),

    #[error("unsupported tables version {found}, expected {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("{table} has no entries")]
    EmptyTable { table: &'static str },

    #[error("{table} tier {index} is empty or reversed")]
    UnsortedTiers { table: &'static str, index: usize },

    #[error("{table} tier {index} does not start where the previous tier ends")]
    GapInTiers { table: &'static str, index: usize },

    #[error("{table} tier {index} has a zero increment")]
    ZeroIncrement { table: &'static str, index: usize },

    #[error("{table} must end with exactly one unbounded tier")]
    BoundedTail { table: &'static str },

    #[error("{table} tier {index}: increment {increment} does not divide base increment {base}")]
    IncrementNotDivisor {
        table: &'static str,
        index: usize,
        increment: u64,
        base: u64,
    },

    #[error("{table} tier {index} starts with negative marginal experience")]
    NegativeMarginal { table: &'static str, index: usize },

    #[error("rank thresholds must increase, entry {index} does not")]
    UnsortedRanks { index: usize },

    #[error("rank {rank} has no capacity")]
    MissingCapacity { rank: u32 },

    #[error("capacity of rank {rank} is below its threshold")]
    CapacityBelowThreshold { rank: u32 },

    #[error("both-stat ratio needs two positive parts")]
    InvalidRatio,
}

pub type Result<T> = std::result::Result<T, TableError>;
