//! Append-only log store: one line per balance request.
//!
//! Appends serialize through an internal mutex so concurrent handlers never
//! interleave partial lines. Reads return raw lines; parsing belongs to the
//! codec.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::types::LogRecord;

/// File-backed append-only store. The file is created on first append if
/// absent; existing content is never truncated, reordered, or edited.
#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single terminated line.
    ///
    /// Logging is best-effort: the caller reports failure and continues the
    /// in-flight request regardless.
    pub fn append(&self, record: &LogRecord) -> Result<(), String> {
        let _guard = self.write_lock.lock().expect("lock");
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| e.to_string())?;
        writeln!(file, "{}", record.to_line()).map_err(|e| e.to_string())
    }

    /// Reads the whole store as lines, in append order. Any failure,
    /// including a missing file, propagates to the caller.
    pub fn read_lines(&self) -> Result<Vec<String>, String> {
        let data = std::fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        Ok(data.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store_in(dir: &tempfile::TempDir) -> LogStore {
        LogStore::new(dir.path().join("logs.log"))
    }

    fn record(timestamp: &str, ip: &str, status: u16) -> LogRecord {
        LogRecord {
            timestamp: timestamp.into(),
            ip: ip.into(),
            status,
        }
    }

    #[test]
    fn append_creates_store_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&record("T1", "1.1.1.1", 200)).unwrap();
        store.append(&record("T2", "2.2.2.2", 403)).unwrap();
        let lines = store.read_lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "T1 - 1.1.1.1 - Status Code: 200",
                "T2 - 2.2.2.2 - Status Code: 403",
            ]
        );
    }

    #[test]
    fn read_of_missing_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.read_lines().is_err());
    }

    #[test]
    fn append_round_trips_through_codec() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&record("2024-01-01T10:00:00", "1.2.3.4", 200)).unwrap();
        store.append(&record("2024-01-01T10:00:01", "1.2.3.4", 408)).unwrap();
        let lines = store.read_lines().unwrap();
        let json = crate::codec::serialize_log_lines(lines.iter().map(String::as_str));
        assert_eq!(
            json,
            r#"[{"timestamp":"2024-01-01T10:00:00","ip":"1.2.3.4","outcome":"200"},{"timestamp":"2024-01-01T10:00:01","ip":"1.2.3.4","outcome":"408"}]"#
        );
    }

    #[test]
    fn concurrent_appends_produce_whole_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));
        let mut handles = Vec::new();
        for thread in 0..8u16 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    store
                        .append(&record(&format!("T{}-{}", thread, i), "1.1.1.1", 200))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        let lines = store.read_lines().unwrap();
        assert_eq!(lines.len(), 200);
        for line in &lines {
            assert!(crate::codec::parse_log_line(line).is_some(), "torn line: {line}");
        }
    }
}
