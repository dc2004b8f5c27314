use super::status::STATUS_REPORT_PREFIX;
use super::task::NO_TASKS_MARKER;
use super::{PlantStatus, Plot, TaskCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One day's logged field-labor activity for one plot. Immutable once
/// stored; the journal has no update or delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub date: NaiveDate,
    pub plot: Plot,
    /// Task categories performed that day; may be empty.
    pub tasks: BTreeSet<TaskCategory>,
    pub labor_count: u32,
    pub note: String,
}

/// A plant-health assessment for a plot. Shares the work-record table but
/// never carries labor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub date: NaiveDate,
    pub plot: Plot,
    pub status: PlantStatus,
    pub note: String,
}

/// One row of the journal. Work logs and status reports live in the same
/// five-column table; in memory they are discriminated explicitly instead
/// of by sniffing the task-description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JournalEntry {
    Work(WorkRecord),
    Status(StatusReport),
}

impl JournalEntry {
    pub fn date(&self) -> NaiveDate {
        match self {
            JournalEntry::Work(w) => w.date,
            JournalEntry::Status(s) => s.date,
        }
    }

    pub fn plot(&self) -> &Plot {
        match self {
            JournalEntry::Work(w) => &w.plot,
            JournalEntry::Status(s) => &s.plot,
        }
    }

    /// Status reports never cost anything.
    pub fn labor_count(&self) -> u32 {
        match self {
            JournalEntry::Work(w) => w.labor_count,
            JournalEntry::Status(_) => 0,
        }
    }

    pub fn note(&self) -> &str {
        match self {
            JournalEntry::Work(w) => &w.note,
            JournalEntry::Status(s) => &s.note,
        }
    }

    /// Synthesized text for the `taskDescription` column of the flat store.
    pub fn task_description(&self) -> String {
        match self {
            JournalEntry::Work(w) => {
                if w.tasks.is_empty() {
                    NO_TASKS_MARKER.to_string()
                } else {
                    w.tasks
                        .iter()
                        .map(TaskCategory::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
            JournalEntry::Status(s) => format!("{STATUS_REPORT_PREFIX}{}", s.status),
        }
    }
}
