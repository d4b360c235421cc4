//! # Core Error Types
//!
//! Sorting itself cannot fail. Only building a sorter can.

use thiserror::Error;

/// Errors that can occur while configuring a sorter.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A pool needs at least one worker.
    #[error("invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    /// The worker pool could not be spawned.
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// A schedule string could not be parsed.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
