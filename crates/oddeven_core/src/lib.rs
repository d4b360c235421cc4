//! # ODDEVEN Core
//!
//! Odd-even transposition sort, serial and parallel, for benchmarking how a
//! dependency-laden sequential algorithm scales across worker threads.
//!
//! ## How It Works
//!
//! ```text
//! phase 0 (even):  (0,1) (2,3) (4,5) ...
//! phase 1 (odd):       (1,2) (3,4) (5,6) ...
//! phase 2 (even):  (0,1) (2,3) (4,5) ...
//!        ...           n phases total
//! ```
//!
//! Pairs inside one phase are disjoint, so they are swapped in parallel
//! without locks. Phase `p + 1` reads what phase `p` wrote, so every phase
//! is a fork-join on the sorter's own pool: the join is the barrier.
//!
//! ## Example
//!
//! ```rust
//! use oddeven_core::{OddEvenSorter, Schedule};
//!
//! let sorter = OddEvenSorter::new(4)?.with_schedule(Schedule::Static);
//! let mut data = vec![5, 3, 1, 4, 2];
//! sorter.sort(&mut data);
//! assert_eq!(data, [1, 2, 3, 4, 5]);
//! # Ok::<(), oddeven_core::CoreError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod phase;
pub mod schedule;
pub mod sorter;

pub use error::{CoreError, CoreResult};
pub use phase::{compare_exchange, Phase};
pub use schedule::Schedule;
pub use sorter::{is_sorted, parallel_sort, serial_sort, OddEvenSorter};
