//! The canonical journal store: one flat table, read in full and rewritten
//! in full on every accepted write.

use crate::domain::JournalEntry;
use crate::schema::{self, RawRow, SchemaError};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read the journal: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write the journal: {0}")]
    Write(#[source] std::io::Error),

    #[error("the journal file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("journal row {index} is invalid: {cause}")]
    CorruptRow {
        index: usize,
        #[source]
        cause: SchemaError,
    },
}

/// Persistence seam for the journal. Implementations decide where the rows
/// live; the semantics stay whole-table.
pub trait JournalStore: Send {
    fn load(&self) -> Result<Vec<JournalEntry>, StoreError>;

    /// Replaces the entire store contents.
    fn save_all(&self, entries: &[JournalEntry]) -> Result<(), StoreError>;

    /// Append-then-save-whole-table; there is no incremental write path.
    fn append(&self, entry: JournalEntry) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save_all(&entries)
    }
}

/// One journal shared across request handlers. The mutex is the
/// single-writer discipline; there is no conflict detection beyond it, the
/// last write wins.
pub type SharedJournal = Arc<Mutex<Box<dyn JournalStore>>>;

/// JSON file of rows in the canonical five-column shape.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JournalStore for FileStore {
    fn load(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // No journal yet: start empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };
        let rows: Vec<RawRow> = serde_json::from_str(&raw)?;
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                schema::validate(row).map_err(|cause| StoreError::CorruptRow { index, cause })
            })
            .collect()
    }

    fn save_all(&self, entries: &[JournalEntry]) -> Result<(), StoreError> {
        let rows: Vec<RawRow> = entries.iter().map(schema::to_row).collect();
        let body = serde_json::to_string_pretty(&rows)?;
        // A failed write must not truncate the journal, so write a sibling
        // temp file first and rename it into place.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)
    }
}

/// Volatile store for tests and embedders.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<JournalEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JournalStore for InMemoryStore {
    fn load(&self) -> Result<Vec<JournalEntry>, StoreError> {
        Ok(self.entries.lock().expect("journal mutex poisoned").clone())
    }

    fn save_all(&self, entries: &[JournalEntry]) -> Result<(), StoreError> {
        *self.entries.lock().expect("journal mutex poisoned") = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Plot, WorkRecord};
    use std::collections::BTreeSet;

    fn entry(date: &str, plot: &str, labor_count: u32) -> JournalEntry {
        JournalEntry::Work(WorkRecord {
            date: date.parse().unwrap(),
            plot: Plot::new(plot),
            tasks: BTreeSet::new(),
            labor_count,
            note: "remember the gloves".to_owned(),
        })
    }

    #[test]
    fn missing_file_loads_as_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("journal.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn saved_entries_load_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("journal.json"));
        let entries = vec![entry("2024-03-05", "coffee", 2), entry("2024-03-06", "mango", 0)];
        store.save_all(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn append_rewrites_the_whole_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("journal.json"));
        store.append(entry("2024-03-05", "coffee", 2)).unwrap();
        store.append(entry("2024-03-06", "durian", 1)).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].plot().name(), "durian");
    }

    #[test]
    fn garbage_journal_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStore::new(path).load().unwrap_err(),
            StoreError::Malformed(_)
        ));
    }
}
