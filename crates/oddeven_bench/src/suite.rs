//! # Benchmark Suite
//!
//! Drives the sorter over every configured size and thread count.
//!
//! ## Rules
//!
//! - One original array per size; every variant sorts a fresh copy of it.
//! - Sorters (and their pools) are built before the clock starts.
//! - Each measurement is the median of `repetitions` timed runs.
//! - The 1-thread baseline is always measured, even if `1` isn't listed.

use std::time::Duration;

use oddeven_core::{is_sorted, serial_sort, OddEvenSorter};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::generator::ArrayGenerator;
use crate::metrics::Scaling;
use crate::recorder::{Recorder, ResultRecord};
use crate::timer::{median, time};

/// Everything measured for one list size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeReport {
    /// Array length.
    pub size: usize,
    /// Median time of the serial reference variant.
    pub serial: Duration,
    /// Median time with one worker.
    pub one_thread: Duration,
    /// One row per configured thread count, in config order.
    pub records: Vec<ResultRecord>,
}

/// A configured benchmark run.
#[derive(Debug)]
pub struct BenchmarkSuite {
    /// Validated configuration.
    config: BenchConfig,
    /// Input source, seeded once per suite.
    generator: ArrayGenerator,
}

impl BenchmarkSuite {
    /// Validates `config` and seeds the generator.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if the config fails validation.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;

        let generator = match config.seed {
            Some(seed) => ArrayGenerator::new(seed),
            None => ArrayGenerator::from_clock(),
        };

        tracing::info!(
            seed = generator.seed(),
            sizes = ?config.sizes,
            threads = ?config.threads,
            repetitions = config.repetitions,
            schedule = %config.schedule,
            "benchmark suite configured"
        );

        Ok(Self { config, generator })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Seed of the input generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Runs every size and returns the reports.
    ///
    /// # Errors
    ///
    /// Stops at the first sorter, verification or recorder failure.
    pub fn run(&mut self, recorder: &mut dyn Recorder) -> BenchResult<Vec<SizeReport>> {
        self.run_with(recorder, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_size` as each size completes.
    ///
    /// # Errors
    ///
    /// Stops at the first sorter, verification or recorder failure.
    pub fn run_with<F>(
        &mut self,
        recorder: &mut dyn Recorder,
        mut on_size: F,
    ) -> BenchResult<Vec<SizeReport>>
    where
        F: FnMut(&SizeReport),
    {
        let sizes = self.config.sizes.clone();
        let mut reports = Vec::with_capacity(sizes.len());

        for size in sizes {
            let report = self.run_size(size, recorder)?;
            recorder.flush()?;
            on_size(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    /// Measures one list size across all variants.
    fn run_size(&mut self, size: usize, recorder: &mut dyn Recorder) -> BenchResult<SizeReport> {
        let original = self.generator.generate(size);
        let mut work = vec![0; size];

        let serial = self.measure(&original, &mut work, "serial", serial_sort::<i32>)?;
        tracing::info!(size, seconds = serial.as_secs_f64(), "serial baseline");

        let mut timings = Vec::with_capacity(self.config.threads.len());
        for &threads in &self.config.threads {
            let elapsed = self.measure_parallel(&original, &mut work, threads)?;
            timings.push((threads, elapsed));
        }

        let one_thread = match timings.iter().find(|(threads, _)| *threads == 1) {
            Some(&(_, elapsed)) => elapsed,
            None => {
                tracing::debug!(size, "1 thread not configured, measuring baseline");
                self.measure_parallel(&original, &mut work, 1)?
            }
        };

        let mut records = Vec::with_capacity(timings.len());
        for (threads, elapsed) in timings {
            let vs_serial = Scaling::relative(serial, elapsed, threads);
            let vs_one = Scaling::relative(one_thread, elapsed, threads);

            let record = ResultRecord {
                list_size: size,
                thread_count: threads,
                elapsed_seconds: elapsed.as_secs_f64(),
                speedup_vs_serial: vs_serial.speedup,
                efficiency_vs_serial: vs_serial.efficiency,
                speedup_vs_1thread: vs_one.speedup,
                efficiency_vs_1thread: vs_one.efficiency,
            };

            tracing::info!(
                size,
                threads,
                seconds = record.elapsed_seconds,
                speedup = record.speedup_vs_1thread,
                efficiency = record.efficiency_vs_1thread,
                "parallel run"
            );

            recorder.record(&record)?;
            records.push(record);
        }

        Ok(SizeReport {
            size,
            serial,
            one_thread,
            records,
        })
    }

    /// Builds a sorter for `threads` and measures it.
    fn measure_parallel(
        &self,
        original: &[i32],
        work: &mut [i32],
        threads: usize,
    ) -> BenchResult<Duration> {
        let sorter = OddEvenSorter::new(threads)?.with_schedule(self.config.schedule);
        let variant = format!("{threads} thread(s)");
        self.measure(original, work, &variant, |data| sorter.sort(data))
    }

    /// Median time of `sort` over fresh copies of `original`.
    fn measure<S>(
        &self,
        original: &[i32],
        work: &mut [i32],
        variant: &str,
        sort: S,
    ) -> BenchResult<Duration>
    where
        S: Fn(&mut [i32]),
    {
        let mut samples = Vec::with_capacity(self.config.repetitions as usize);

        for _ in 0..self.config.repetitions {
            work.copy_from_slice(original);
            let ((), elapsed) = time(|| sort(work));

            if self.config.verify && !is_sorted(work) {
                tracing::error!(size = work.len(), variant, "sorted buffer is out of order");
                return Err(BenchError::Unsorted {
                    size: work.len(),
                    variant: variant.to_string(),
                });
            }
            samples.push(elapsed);
        }

        Ok(median(&mut samples))
    }
}
