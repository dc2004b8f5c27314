//! Bulk dataset import: all-or-nothing validation, then an explicit replace
//! or append of the canonical store.

use crate::domain::JournalEntry;
use crate::schema::{self, REQUIRED_COLUMNS, RawRow, SchemaError};
use crate::store::{JournalStore, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("dataset is missing required column `{0}`")]
    SchemaMismatch(&'static str),

    #[error("row {index} is invalid: {cause}")]
    RowInvalid {
        index: usize,
        #[source]
        cause: SchemaError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates every row up front. The store is never touched unless the
/// whole dataset is acceptable; there is no partial import.
pub fn validate_dataset(rows: &[RawRow]) -> Result<Vec<JournalEntry>, ImportError> {
    for row in rows {
        for column in REQUIRED_COLUMNS {
            if !row.contains_key(column) {
                return Err(ImportError::SchemaMismatch(column));
            }
        }
    }
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            schema::validate(row).map_err(|cause| ImportError::RowInvalid { index, cause })
        })
        .collect()
}

/// Replaces the entire journal with the dataset. Destructive: prior history
/// is discarded, exactly like uploading a fresh spreadsheet over the old one.
pub fn import_replace(store: &dyn JournalStore, rows: &[RawRow]) -> Result<usize, ImportError> {
    let entries = validate_dataset(rows)?;
    store.save_all(&entries)?;
    tracing::info!(rows = entries.len(), "journal replaced by imported dataset");
    Ok(entries.len())
}

/// Appends the dataset to the existing journal instead of replacing it.
pub fn import_append(store: &dyn JournalStore, rows: &[RawRow]) -> Result<usize, ImportError> {
    let entries = validate_dataset(rows)?;
    let mut journal = store.load()?;
    let added = entries.len();
    journal.extend(entries);
    store.save_all(&journal)?;
    tracing::info!(rows = added, "imported dataset appended to journal");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use serde_json::{Value, json};

    fn row(date: &str, plot: &str) -> RawRow {
        let value = json!({
            "date": date,
            "plot": plot,
            "taskDescription": "watering",
            "laborCount": 2,
            "note": "",
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        import_replace(&store, &[row("2024-01-01", "durian")]).unwrap();
        store
    }

    #[test]
    fn missing_column_fails_and_leaves_the_store_unchanged() {
        let store = seeded_store();
        let mut bad = row("2024-02-02", "coffee");
        bad.remove("plot");
        let result = import_replace(&store, &[row("2024-02-01", "coffee"), bad]);
        assert!(matches!(result, Err(ImportError::SchemaMismatch("plot"))));

        let journal = store.load().unwrap();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].plot().name(), "durian");
    }

    #[test]
    fn invalid_row_reports_its_index_and_cause() {
        let store = seeded_store();
        let mut bad = row("2024-02-02", "coffee");
        bad.insert("date".into(), json!("soon"));
        let result = import_replace(&store, &[row("2024-02-01", "coffee"), bad]);
        match result {
            Err(ImportError::RowInvalid { index, cause }) => {
                assert_eq!(index, 1);
                assert_eq!(cause, SchemaError::InvalidDate("soon".into()));
            }
            other => panic!("expected row-invalid error, got {other:?}"),
        }
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn valid_dataset_replaces_the_whole_journal() {
        let store = seeded_store();
        let imported =
            import_replace(&store, &[row("2024-02-01", "coffee"), row("2024-02-02", "mango")])
                .unwrap();
        assert_eq!(imported, 2);

        let journal = store.load().unwrap();
        assert_eq!(journal.len(), 2);
        // The pre-import durian row is gone.
        assert!(journal.iter().all(|e| e.plot().name() != "durian"));
    }

    #[test]
    fn append_keeps_existing_rows() {
        let store = seeded_store();
        let imported = import_append(&store, &[row("2024-02-01", "coffee")]).unwrap();
        assert_eq!(imported, 1);

        let journal = store.load().unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].plot().name(), "durian");
        assert_eq!(journal[1].plot().name(), "coffee");
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let store = InMemoryStore::new();
        let mut wide = row("2024-02-01", "coffee");
        wide.insert("weather".into(), json!("heavy rain"));
        assert_eq!(import_replace(&store, &[wide]).unwrap(), 1);
    }
}
