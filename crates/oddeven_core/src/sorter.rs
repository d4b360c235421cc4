//! # Odd-Even Transposition Sorter
//!
//! Two variants with identical phase logic:
//!
//! - [`serial_sort`]: one thread, no synchronization. Timing baseline.
//! - [`OddEvenSorter::sort`]: pairs of each phase spread over the sorter's
//!   own worker pool, with a full join between phases.
//!
//! Both run exactly `n` phases. There is no early exit on an already
//! sorted array; the benchmark measures the algorithm as it is.
//!
//! ## Pool Ownership
//!
//! Each sorter owns a pool of exactly `threads` workers. Nothing touches the
//! global rayon pool, so sorters with different thread counts can live side
//! by side and a sort never changes another sort's parallelism.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{CoreError, CoreResult};
use crate::phase::Phase;
use crate::schedule::Schedule;

/// Sorts `data` ascending on the calling thread.
///
/// Runs `data.len()` phases, alternating even and odd.
pub fn serial_sort<T: Ord>(data: &mut [T]) {
    for index in 0..data.len() {
        Phase::of(index).apply(data);
    }
}

/// Sorts `data` with a sorter built for this call only.
///
/// Convenience for one-off sorts. Pool start-up is included in the call,
/// so benchmarks should build an [`OddEvenSorter`] once instead.
///
/// # Errors
///
/// Returns [`CoreError::InvalidThreadCount`] when `threads` is zero and
/// [`CoreError::PoolBuild`] when the workers cannot be spawned.
pub fn parallel_sort<T: Ord + Send>(data: &mut [T], threads: usize) -> CoreResult<()> {
    OddEvenSorter::new(threads)?.sort(data);
    Ok(())
}

/// Returns true if `data` is in non-decreasing order.
#[must_use]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Parallel odd-even transposition sorter.
///
/// # Example
///
/// ```rust
/// use oddeven_core::{OddEvenSorter, Schedule};
///
/// let sorter = OddEvenSorter::new(2)?.with_schedule(Schedule::Dynamic { chunk: 4 });
/// let mut data = vec![9, -1, 4, 4, 0];
/// sorter.sort(&mut data);
/// assert_eq!(data, [-1, 0, 4, 4, 9]);
/// # Ok::<(), oddeven_core::CoreError>(())
/// ```
pub struct OddEvenSorter {
    /// Workers that execute the pairs of a phase.
    pool: ThreadPool,
    /// Number of workers in `pool`.
    threads: usize,
    /// How a phase's pairs are split across workers.
    schedule: Schedule,
}

impl OddEvenSorter {
    /// Creates a sorter with a pool of exactly `threads` workers and the
    /// default schedule.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidThreadCount`] when `threads` is zero and
    /// [`CoreError::PoolBuild`] when the workers cannot be spawned.
    pub fn new(threads: usize) -> CoreResult<Self> {
        if threads == 0 {
            return Err(CoreError::InvalidThreadCount(threads));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("oddeven-worker-{i}"))
            .build()?;

        tracing::debug!(threads, "sort worker pool ready");

        Ok(Self {
            pool,
            threads,
            schedule: Schedule::default(),
        })
    }

    /// Replaces the schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Number of workers.
    #[inline]
    #[must_use]
    pub const fn threads(&self) -> usize {
        self.threads
    }

    /// Current schedule.
    #[inline]
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Sorts `data` ascending.
    ///
    /// Blocks until all `data.len()` phases are done. Arrays shorter than
    /// two elements have no pairs and return immediately.
    pub fn sort<T: Ord + Send>(&self, data: &mut [T]) {
        let n = data.len();
        if n < 2 {
            return;
        }

        let schedule = self.schedule;
        let threads = self.threads;

        tracing::trace!(n, threads, %schedule, "odd-even sort start");

        self.pool.install(|| {
            for index in 0..n {
                // Returns only after every pair of this phase is done.
                schedule.sweep(Phase::of(index).pair_region(data), threads);
            }
        });
    }
}

impl std::fmt::Debug for OddEvenSorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OddEvenSorter")
            .field("threads", &self.threads)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(n: usize) -> Vec<i32> {
        (0..n as u64)
            .map(|i| ((i * 2_654_435_761) % 100_000) as i32)
            .collect()
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            OddEvenSorter::new(0),
            Err(CoreError::InvalidThreadCount(0))
        ));
        let mut data = vec![2, 1];
        assert!(parallel_sort(&mut data, 0).is_err());
        assert_eq!(data, [2, 1]);
    }

    #[test]
    fn test_reference_scenario() {
        for threads in [1, 2, 4] {
            let mut data = vec![5, 3, 1, 4, 2];
            parallel_sort(&mut data, threads).unwrap();
            assert_eq!(data, [1, 2, 3, 4, 5], "threads={threads}");
        }

        let mut data = vec![5, 3, 1, 4, 2];
        serial_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_full_trace_sorted_after_n_phases() {
        let mut data = [5, 3, 1, 4, 2];
        let expected = [
            [3, 5, 1, 4, 2],
            [3, 1, 5, 2, 4],
            [1, 3, 2, 5, 4],
            [1, 2, 3, 4, 5],
            [1, 2, 3, 4, 5],
        ];
        for (index, after) in expected.iter().enumerate() {
            Phase::of(index).apply(&mut data);
            assert_eq!(&data, after, "after phase {index}");
        }
    }

    #[test]
    fn test_reversed_needs_all_phases() {
        // Worst case: the smallest element travels n-1 positions.
        let mut data: Vec<i32> = (0..64).rev().collect();
        let sorter = OddEvenSorter::new(2).unwrap().with_schedule(Schedule::Static);
        sorter.sort(&mut data);
        assert_eq!(data, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let input = scrambled(257);
        let mut expected = input.clone();
        serial_sort(&mut expected);
        assert!(is_sorted(&expected));

        for schedule in [
            Schedule::Static,
            Schedule::Dynamic { chunk: 1 },
            Schedule::Dynamic { chunk: 7 },
            Schedule::Guided { min_chunk: 4 },
        ] {
            let sorter = OddEvenSorter::new(3).unwrap().with_schedule(schedule);
            let mut actual = input.clone();
            sorter.sort(&mut actual);
            assert_eq!(actual, expected, "{schedule}");
        }
    }

    #[test]
    fn test_sorter_is_reusable() {
        let sorter = OddEvenSorter::new(2).unwrap();
        for n in [0, 1, 2, 3, 33] {
            let mut data = scrambled(n);
            sorter.sort(&mut data);
            assert!(is_sorted(&data), "n={n}");
        }
    }

    #[test]
    fn test_accessors() {
        let sorter = OddEvenSorter::new(3)
            .unwrap()
            .with_schedule(Schedule::Dynamic { chunk: 9 });
        assert_eq!(sorter.threads(), 3);
        assert_eq!(sorter.schedule(), Schedule::Dynamic { chunk: 9 });
        assert!(format!("{sorter:?}").contains("threads: 3"));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
