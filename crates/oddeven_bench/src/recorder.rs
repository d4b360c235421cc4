//! # Result Recorder
//!
//! Where measurement rows go. The suite only sees the [`Recorder`] trait.
//!
//! ## CSV Format
//!
//! ```text
//! list_size,thread_count,elapsed_seconds,speedup_vs_serial,efficiency_vs_serial,speedup_vs_1thread,efficiency_vs_1thread
//! 50000,2,3.1415,1.83,0.915,1.90,0.95
//! ```
//!
//! The file is opened in append mode. The header is written only when the
//! file is empty, so repeated runs accumulate under a single header.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::BenchResult;

/// One measurement row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Array length.
    pub list_size: usize,
    /// Worker count.
    pub thread_count: usize,
    /// Median wall-clock time of the sort.
    pub elapsed_seconds: f64,
    /// Serial time over this time.
    pub speedup_vs_serial: f64,
    /// `speedup_vs_serial / thread_count`.
    pub efficiency_vs_serial: f64,
    /// One-worker time over this time.
    pub speedup_vs_1thread: f64,
    /// `speedup_vs_1thread / thread_count`.
    pub efficiency_vs_1thread: f64,
}

/// Sink for measurement rows.
pub trait Recorder {
    /// Stores one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row can't be stored.
    fn record(&mut self, record: &ResultRecord) -> BenchResult<()>;

    /// Makes stored rows durable.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered rows can't be written out.
    fn flush(&mut self) -> BenchResult<()> {
        Ok(())
    }
}

/// Append-only CSV result log.
pub struct CsvRecorder {
    /// Row writer over the opened file.
    writer: csv::Writer<File>,
    /// File location, for logging.
    path: PathBuf,
}

impl CsvRecorder {
    /// Opens (or creates) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BenchError::Io`] if the file can't be opened.
    pub fn open(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let is_empty = file.metadata()?.len() == 0;

        let writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);

        tracing::info!(path = %path.display(), new_file = is_empty, "result log open");

        Ok(Self { writer, path })
    }

    /// Location of the log.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Recorder for CsvRecorder {
    fn record(&mut self, record: &ResultRecord) -> BenchResult<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn flush(&mut self) -> BenchResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for CsvRecorder {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to flush result log");
        }
    }
}

/// In-memory recorder. Clones share the same rows.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecorder {
    /// Rows recorded so far.
    rows: Arc<Mutex<Vec<ResultRecord>>>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows.
    #[must_use]
    pub fn rows(&self) -> Vec<ResultRecord> {
        self.rows.lock().clone()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl Recorder for MemoryRecorder {
    fn record(&mut self, record: &ResultRecord) -> BenchResult<()> {
        self.rows.lock().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv_path(tag: &str) -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("oddeven_{tag}_{id}.csv"))
    }

    fn row(list_size: usize, thread_count: usize) -> ResultRecord {
        ResultRecord {
            list_size,
            thread_count,
            elapsed_seconds: 0.5,
            speedup_vs_serial: 1.5,
            efficiency_vs_serial: 0.75,
            speedup_vs_1thread: 1.8,
            efficiency_vs_1thread: 0.9,
        }
    }

    #[test]
    fn test_header_written_once() {
        let path = temp_csv_path("header");

        {
            let mut recorder = CsvRecorder::open(&path).unwrap();
            recorder.record(&row(10, 1)).unwrap();
            recorder.flush().unwrap();
        }
        {
            let mut recorder = CsvRecorder::open(&path).unwrap();
            recorder.record(&row(10, 2)).unwrap();
            recorder.record(&row(10, 4)).unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "list_size,thread_count,elapsed_seconds,speedup_vs_serial,\
             efficiency_vs_serial,speedup_vs_1thread,efficiency_vs_1thread"
        );
        assert_eq!(text.matches("list_size").count(), 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ResultRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, [row(10, 1), row(10, 2), row(10, 4)]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = temp_csv_path("dir");
        let path = dir.join("nested").join("results.csv");
        let recorder = CsvRecorder::open(&path).unwrap();
        assert_eq!(recorder.path(), path.as_path());
        assert!(path.exists());
        drop(recorder);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_memory_recorder_shared() {
        let recorder = MemoryRecorder::new();
        let mut writer = recorder.clone();
        assert!(recorder.is_empty());

        writer.record(&row(5, 2)).unwrap();
        writer.flush().unwrap();

        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.rows(), [row(5, 2)]);
    }
}
