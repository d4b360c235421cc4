//! # Wall-Clock Timing
//!
//! Monotonic clock around a closure. Nothing else is inside the window.

use std::time::{Duration, Instant};

/// Runs `f` and returns its value with the elapsed wall-clock time.
#[inline]
pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Median of `samples`. Reorders the slice.
///
/// Even counts average the two middle samples. An empty slice yields zero.
pub fn median(samples: &mut [Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    samples.sort_unstable();
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[mid]
    } else {
        (samples[mid - 1] + samples[mid]) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_returns_value() {
        let (value, elapsed) = time(|| {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        assert_eq!(value, 7);
        assert!(elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_median() {
        let ms = Duration::from_millis;
        assert_eq!(median(&mut []), Duration::ZERO);
        assert_eq!(median(&mut [ms(5)]), ms(5));
        assert_eq!(median(&mut [ms(9), ms(1), ms(5)]), ms(5));
        assert_eq!(median(&mut [ms(4), ms(1), ms(2), ms(100)]), ms(3));
    }
}
