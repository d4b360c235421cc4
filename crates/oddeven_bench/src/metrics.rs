//! # Scaling Metrics
//!
//! ```text
//! speedup    = baseline / measured
//! efficiency = speedup / threads
//! ```

use std::time::Duration;

/// Speedup and efficiency of one measurement against a baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaling {
    /// Baseline time over measured time.
    pub speedup: f64,
    /// Speedup per worker, as a fraction (1.0 is linear scaling).
    pub efficiency: f64,
}

impl Scaling {
    /// Compares `measured` on `threads` workers against `baseline`.
    ///
    /// A zero `measured` time gives zero speedup instead of infinity.
    #[must_use]
    pub fn relative(baseline: Duration, measured: Duration, threads: usize) -> Self {
        let measured = measured.as_secs_f64();
        if measured <= 0.0 {
            return Self {
                speedup: 0.0,
                efficiency: 0.0,
            };
        }
        let speedup = baseline.as_secs_f64() / measured;
        #[allow(clippy::cast_precision_loss)]
        let efficiency = speedup / threads.max(1) as f64;
        Self {
            speedup,
            efficiency,
        }
    }

    /// Efficiency in percent.
    #[inline]
    #[must_use]
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scaling() {
        let s = Scaling::relative(Duration::from_secs(4), Duration::from_secs(1), 4);
        assert!((s.speedup - 4.0).abs() < 1e-12);
        assert!((s.efficiency - 1.0).abs() < 1e-12);
        assert!((s.efficiency_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_slowdown() {
        let s = Scaling::relative(Duration::from_millis(100), Duration::from_millis(200), 2);
        assert!((s.speedup - 0.5).abs() < 1e-12);
        assert!((s.efficiency - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_measured() {
        let s = Scaling::relative(Duration::from_secs(1), Duration::ZERO, 2);
        assert_eq!(s.speedup, 0.0);
        assert_eq!(s.efficiency, 0.0);
    }
}
