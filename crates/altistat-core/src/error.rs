use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced by the altistat crates.
#[derive(Error, Debug)]
pub enum AltistatError {
    /// A batch file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted batch failed structural validation and was rejected wholesale.
    #[error("Invalid batch row at index {index}: {reason}")]
    InvalidBatchRow { index: usize, reason: String },

    /// The persisted batch is not a JSON array at the top level.
    #[error("Invalid batch file: {0}")]
    InvalidBatch(String),

    /// A date string did not match the `YYYY-MM-DD` format.
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A date-range filter was given with the bounds reversed.
    #[error("Start date {start} must not be after end date {end}")]
    DateRangeOrder { start: NaiveDate, end: NaiveDate },

    /// The day/month text parser found no resolvable month name.
    #[error("Could not parse day/month from: {0:?}")]
    DayMonthParse(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the altistat crates.
pub type Result<T> = std::result::Result<T, AltistatError>;
