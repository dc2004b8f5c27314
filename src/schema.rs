//! Canonical record shape and validation of raw tabular rows.
//!
//! The flat store has exactly five columns: `date, plot, taskDescription,
//! laborCount, note`. This module is the only place that maps between that
//! row shape and the in-memory [`JournalEntry`] variants.

use crate::domain::{
    JournalEntry, NO_TASKS_MARKER, PlantStatus, Plot, STATUS_REPORT_PREFIX, StatusReport,
    TaskCategory, WorkRecord,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "plot", "taskDescription", "laborCount", "note"];

/// One untyped row, as delivered by the UI or a bulk import. Column order
/// does not matter; extra columns are ignored.
pub type RawRow = Map<String, Value>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SchemaError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("`{0}` is not a calendar date")]
    InvalidDate(String),

    #[error("`{0}` is not a non-negative labor count")]
    InvalidLaborCount(String),
}

/// Checks a raw row against the canonical shape and types it.
///
/// Plot membership is deliberately not checked here: the known-plot set is
/// configuration, and write-time scoping belongs to `RoleScope`. A row whose
/// task description carries the status-report label becomes a
/// [`JournalEntry::Status`]; its labor-count cell must still be a valid
/// integer but its value is ignored, status reports carry no labor.
pub fn validate(row: &RawRow) -> Result<JournalEntry, SchemaError> {
    let date = coerce_date(required(row, "date")?)?;
    let plot = Plot::new(text(required(row, "plot")?));
    let description = text(required(row, "taskDescription")?);
    let labor_count = coerce_labor_count(required(row, "laborCount")?)?;
    let note = text(required(row, "note")?);

    if let Some(label) = description.strip_prefix(STATUS_REPORT_PREFIX) {
        if let Some(status) = PlantStatus::parse(label.trim()) {
            return Ok(JournalEntry::Status(StatusReport {
                date,
                plot,
                status,
                note,
            }));
        }
    }

    Ok(JournalEntry::Work(WorkRecord {
        date,
        plot,
        tasks: parse_tasks(&description),
        labor_count,
        note,
    }))
}

/// Serializes an entry back into the five-column row shape. A row produced
/// here always re-validates.
pub fn to_row(entry: &JournalEntry) -> RawRow {
    let mut row = RawRow::new();
    row.insert("date".into(), Value::String(entry.date().to_string()));
    row.insert("plot".into(), Value::String(entry.plot().name().to_owned()));
    row.insert(
        "taskDescription".into(),
        Value::String(entry.task_description()),
    );
    row.insert("laborCount".into(), Value::from(entry.labor_count()));
    row.insert("note".into(), Value::String(entry.note().to_owned()));
    row
}

fn required<'a>(row: &'a RawRow, column: &'static str) -> Result<&'a Value, SchemaError> {
    row.get(column).ok_or(SchemaError::MissingColumn(column))
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_date(value: &Value) -> Result<NaiveDate, SchemaError> {
    let raw = text(value);
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    // Spreadsheet exports often put a full timestamp in the date column.
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Ok(datetime.date());
    }
    Err(SchemaError::InvalidDate(raw))
}

fn coerce_labor_count(value: &Value) -> Result<u32, SchemaError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SchemaError::InvalidLaborCount(text(value)))
}

fn parse_tasks(description: &str) -> BTreeSet<TaskCategory> {
    let description = description.trim();
    if description.is_empty() || description == NO_TASKS_MARKER {
        return BTreeSet::new();
    }
    description
        .split(',')
        .map(|part| TaskCategory::parse(part.trim()))
        .collect()
}
