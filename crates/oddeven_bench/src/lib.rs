//! # ODDEVEN Bench
//!
//! Scaling harness for the odd-even transposition sort.
//!
//! ## What One Run Does
//!
//! ```text
//! for each list size n:
//!     original = generate(n)                  (seeded, bounded by 100,000)
//!     serial   = time(serial_sort(copy))      (reference baseline)
//!     for each thread count t:
//!         time(sorter_t.sort(copy))           (pool built before the clock)
//!         speedup/efficiency vs serial and vs t = 1
//!         -> recorder (CSV, header once)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use oddeven_bench::{BenchConfig, BenchmarkSuite, CsvRecorder};
//!
//! let config = BenchConfig::default();
//! let mut recorder = CsvRecorder::open(&config.output)?;
//! let mut suite = BenchmarkSuite::new(config)?;
//! for report in suite.run(&mut recorder)? {
//!     println!("{}", oddeven_bench::report::size_report(&report));
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod recorder;
pub mod report;
pub mod suite;
pub mod timer;

pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use generator::{ArrayGenerator, VALUE_BOUND};
pub use metrics::Scaling;
pub use recorder::{CsvRecorder, MemoryRecorder, Recorder, ResultRecord};
pub use suite::{BenchmarkSuite, SizeReport};
