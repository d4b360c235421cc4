//! # Text Report
//!
//! Human-readable summary per list size:
//!
//! ```text
//! List with 50000 elements
//! serial: 2.1034 seconds
//! 1 thread: 2.3107 seconds
//! 2 threads: 1.2890 seconds | Speedup: 1.79 | Efficiency: 89.63% | vs serial: 1.63x
//! 4 threads: 0.7812 seconds | Speedup: 2.96 | Efficiency: 73.95% | vs serial: 2.69x
//! ---------------------------------------------------
//! ```
//!
//! Speedup and efficiency are against the 1-thread run.

use std::fmt::Write as _;
use std::time::Duration;

use crate::recorder::ResultRecord;
use crate::suite::SizeReport;

/// Line printed after each size.
pub const SEPARATOR: &str = "---------------------------------------------------";

/// Header line for a size.
#[must_use]
pub fn size_header(size: usize) -> String {
    format!("List with {size} elements")
}

/// Serial baseline line.
#[must_use]
pub fn serial_line(elapsed: Duration) -> String {
    format!("serial: {:.4} seconds", elapsed.as_secs_f64())
}

/// One line per thread count.
#[must_use]
pub fn thread_line(record: &ResultRecord) -> String {
    if record.thread_count == 1 {
        return format!("1 thread: {:.4} seconds", record.elapsed_seconds);
    }
    format!(
        "{} threads: {:.4} seconds | Speedup: {:.2} | Efficiency: {:.2}% | vs serial: {:.2}x",
        record.thread_count,
        record.elapsed_seconds,
        record.speedup_vs_1thread,
        record.efficiency_vs_1thread * 100.0,
        record.speedup_vs_serial,
    )
}

/// Full block for one size, separator included.
#[must_use]
pub fn size_report(report: &SizeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", size_header(report.size));
    let _ = writeln!(out, "{}", serial_line(report.serial));
    if !report.records.iter().any(|r| r.thread_count == 1) {
        let _ = writeln!(
            out,
            "1 thread: {:.4} seconds (baseline)",
            report.one_thread.as_secs_f64()
        );
    }
    for record in &report.records {
        let _ = writeln!(out, "{}", thread_line(record));
    }
    out.push_str(SEPARATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(thread_count: usize, elapsed_seconds: f64) -> ResultRecord {
        ResultRecord {
            list_size: 1000,
            thread_count,
            elapsed_seconds,
            speedup_vs_serial: 1.5,
            efficiency_vs_serial: 0.75,
            speedup_vs_1thread: 2.0,
            efficiency_vs_1thread: 0.5,
        }
    }

    #[test]
    fn test_lines() {
        assert_eq!(size_header(50_000), "List with 50000 elements");
        assert_eq!(serial_line(Duration::from_millis(1500)), "serial: 1.5000 seconds");
        assert_eq!(thread_line(&record(1, 0.25)), "1 thread: 0.2500 seconds");
        assert_eq!(
            thread_line(&record(4, 0.125)),
            "4 threads: 0.1250 seconds | Speedup: 2.00 | Efficiency: 50.00% | vs serial: 1.50x"
        );
    }

    #[test]
    fn test_size_report_block() {
        let report = SizeReport {
            size: 1000,
            serial: Duration::from_secs(1),
            one_thread: Duration::from_millis(250),
            records: vec![record(1, 0.25), record(2, 0.2)],
        };
        let text = size_report(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "List with 1000 elements");
        assert_eq!(lines[2], "1 thread: 0.2500 seconds");
        assert!(lines[3].starts_with("2 threads: 0.2000 seconds"));
        assert_eq!(lines[4], SEPARATOR);
    }

    #[test]
    fn test_baseline_line_when_one_thread_not_listed() {
        let report = SizeReport {
            size: 10,
            serial: Duration::from_secs(1),
            one_thread: Duration::from_millis(500),
            records: vec![record(2, 0.2)],
        };
        assert!(size_report(&report).contains("1 thread: 0.5000 seconds (baseline)"));
    }
}
