//! Append-only CSV lead log. One row per submission, header written once.

use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::app::domain::Lead;

/// Errors from writing the lead log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only writer for the lead log file.
///
/// Each append opens the file, takes an advisory write lock, writes one row,
/// and closes. The lock serializes concurrent submissions so rows from
/// simultaneous requests cannot interleave.
#[derive(Debug)]
pub struct LeadLog {
    path: PathBuf,
}

impl LeadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one lead. Creates the file and writes the header row when the
    /// file is empty or missing.
    pub fn append(&self, lead: &Lead) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut lock = fd_lock::RwLock::new(file);
        let mut guard = lock.write()?;

        // Header decision happens under the lock so a racing first writer
        // cannot produce two headers.
        let write_header = guard.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(&mut *guard);
        writer.serialize(lead)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Lead {
        Lead::new(name, "Acme", "a@x.com", "Hi").unwrap()
    }

    #[test]
    fn creates_file_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = LeadLog::new(dir.path().join("messages.csv"));

        log.append(&sample("Alice")).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("messages.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("timestamp,name,business,contact,message"));
        assert!(lines.next().unwrap().contains("Alice"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn header_written_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.csv");

        // Separate LeadLog instances model separate process runs on the
        // same file.
        LeadLog::new(&path).append(&sample("Alice")).unwrap();
        LeadLog::new(&path).append(&sample("Bob")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let headers = contents.lines().filter(|l| l.starts_with("timestamp,")).count();
        assert_eq!(headers, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn rows_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        let log = LeadLog::new(&path);

        let lead = Lead::new("Alice", "", "a@x.com", "Line one, with a comma").unwrap();
        log.append(&lead).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Lead> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].business, "");
        assert_eq!(rows[0].message, "Line one, with a comma");
        assert_eq!(rows[0].timestamp, lead.timestamp);
    }

    #[test]
    fn unwritable_path_errors() {
        let log = LeadLog::new("/nonexistent-dir/messages.csv");
        assert!(log.append(&sample("Alice")).is_err());
    }
}
