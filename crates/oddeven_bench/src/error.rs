//! # Bench Error Types
//!
//! Everything here is fatal for a run: the binary logs it and exits.

use oddeven_core::CoreError;
use thiserror::Error;

/// Errors that can occur while running the benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Reading the config or writing the result log failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The config file is not valid TOML for [`crate::BenchConfig`].
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config parsed but makes no sense.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The sorter could not be built.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A sorted buffer failed the order check.
    #[error("unsorted output: list size {size}, variant {variant}")]
    Unsorted {
        /// Length of the array.
        size: usize,
        /// Which variant produced it.
        variant: String,
    },
}

/// Result type for bench operations.
pub type BenchResult<T> = Result<T, BenchError>;
