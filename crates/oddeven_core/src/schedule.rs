//! # Work Partitioning
//!
//! How the pairs of one phase are handed to workers. Any schedule is
//! correct: pairs are disjoint and the phase joins before the next one
//! starts. Schedules only trade load balance against task overhead.
//!
//! | Schedule  | Task size                         | Assignment        |
//! |-----------|-----------------------------------|-------------------|
//! | `Static`  | `ceil(pairs / threads)` pairs     | one block each    |
//! | `Dynamic` | `chunk` pairs                     | work stealing     |
//! | `Guided`  | adaptive, at least `min_chunk`    | adaptive splitting|

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::phase::{compare_exchange, sweep_pairs};

/// Default lower bound on pairs per task for [`Schedule::Guided`].
pub const DEFAULT_MIN_CHUNK: usize = 16;

/// Partitioning policy for the pairs of one phase.
///
/// Deserializes from a tagged table:
///
/// ```toml
/// [schedule]
/// kind = "dynamic"
/// chunk = 64
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    /// Contiguous blocks, one per worker.
    Static,
    /// Fixed-size blocks picked up by idle workers.
    Dynamic {
        /// Pairs per block.
        chunk: usize,
    },
    /// Blocks split on demand, never below `min_chunk` pairs.
    Guided {
        /// Lower bound on pairs per task.
        min_chunk: usize,
    },
}

impl Default for Schedule {
    fn default() -> Self {
        Self::Guided {
            min_chunk: DEFAULT_MIN_CHUNK,
        }
    }
}

impl Schedule {
    /// Pairs per task for a phase of `pairs` pairs on `threads` workers.
    ///
    /// For `Guided` this is the lower bound; the pool may hand out more.
    /// Never returns zero.
    #[must_use]
    pub fn pairs_per_task(self, pairs: usize, threads: usize) -> usize {
        match self {
            Self::Static => pairs.div_ceil(threads.max(1)).max(1),
            Self::Dynamic { chunk } => chunk.max(1),
            Self::Guided { min_chunk } => min_chunk.max(1),
        }
    }

    /// Runs one phase over `region` (see [`crate::Phase::pair_region`]) on
    /// the current pool. Returns once every pair has been processed.
    pub(crate) fn sweep<T: Ord + Send>(self, region: &mut [T], threads: usize) {
        let pairs = region.len() / 2;
        if pairs == 0 {
            return;
        }
        match self {
            Self::Guided { min_chunk } => {
                region
                    .par_chunks_mut(2)
                    .with_min_len(min_chunk.max(1))
                    .for_each(|pair| {
                        compare_exchange(pair);
                    });
            }
            Self::Static | Self::Dynamic { .. } => {
                let block = 2 * self.pairs_per_task(pairs, threads);
                region.par_chunks_mut(block).for_each(sweep_pairs);
            }
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic { chunk } => write!(f, "dynamic:{chunk}"),
            Self::Guided { min_chunk } => write!(f, "guided:{min_chunk}"),
        }
    }
}

impl FromStr for Schedule {
    type Err = CoreError;

    /// Parses `static`, `dynamic:<chunk>` or `guided:<min_chunk>`.
    /// `dynamic` and `guided` without a size use [`DEFAULT_MIN_CHUNK`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, size) = match s.trim().split_once(':') {
            Some((kind, size)) => {
                let size = size
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| CoreError::InvalidSchedule(s.to_string()))?;
                (kind.trim(), size)
            }
            None => (s.trim(), DEFAULT_MIN_CHUNK),
        };

        match kind.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic { chunk: size }),
            "guided" => Ok(Self::Guided { min_chunk: size }),
            _ => Err(CoreError::InvalidSchedule(s.to_string())),
        }
    }
}
