//! Snapshot persistence for the directory.
//!
//! The directory itself performs no I/O.  Durability is delegated to
//! an implementation of the [`SnapshotStore`] trait: the hosting
//! application hands the full state over after every mutation and asks
//! for the last snapshot back when it starts.  The hand-off is
//! fire-and-forget from the directory's point of view; a failed
//! persist never fails the mutation that triggered it.
//!
//! [`JsonSnapshotStore`] is the bundled implementation, keeping one
//! JSON document on disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::directory::Directory;

/// Failures the persistence layer can report.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot file access failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable storage for directory snapshots.
///
/// Snapshot stores must be thread-safe (`Send + Sync`) because the
/// server persists from whichever request task performed the
/// mutation.
pub trait SnapshotStore: Send + Sync {
    /// Returns the last persisted snapshot, or `None` when no
    /// snapshot has ever been written.
    fn load(&self) -> Result<Option<Directory>, SnapshotError>;

    /// Serializes and stores the full state.  Replaces whatever
    /// snapshot was stored before; there is no history.
    fn persist(&self, dir: &Directory) -> Result<(), SnapshotError>;
}

/// Stores the directory as a single pretty-printed JSON document.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<Directory>, SnapshotError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let dir = serde_json::from_str(&data)?;
        Ok(Some(dir))
    }

    fn persist(&self, dir: &Directory) -> Result<(), SnapshotError> {
        let data = serde_json::to_string_pretty(dir)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus, EmploymentType, NewEmployee};
    use crate::seed;
    use chrono::NaiveDate;

    #[test]
    fn load_from_missing_path_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(tmp.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn round_trip_preserves_records_and_counters() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(tmp.path().join("org.json"));

        let mut dir = seed::default_directory();
        dir.delete_employee("EMP002");
        store.persist(&dir).unwrap();

        let mut restored = store.load().unwrap().unwrap();
        assert_eq!(restored, dir);

        // Counters travel with the snapshot: even though EMP002 was
        // deleted before persisting, the next id is still EMP004.
        let id = restored.add_employee(NewEmployee {
            name: "Dev Sharma".into(),
            email: "dev.sharma@meridianlabs.example".into(),
            phone: "+91 98220 10004".into(),
            status: EmployeeStatus::Active,
            employment_type: EmploymentType::FullTime,
            department_id: "DEPT001".into(),
            designation_id: "DES001".into(),
            location_id: "LOC001".into(),
            reporting_manager_id: None,
            date_of_joining: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            exit_date: None,
            exit_reason: None,
        });
        assert_eq!(id, "EMP004");
    }

    #[test]
    fn persist_replaces_the_previous_snapshot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(tmp.path().join("org.json"));

        let mut dir = seed::default_directory();
        store.persist(&dir).unwrap();
        dir.delete_employee("EMP003");
        store.persist(&dir).unwrap();

        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.employees.len(), 2);
    }
}
