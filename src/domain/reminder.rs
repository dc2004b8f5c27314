use super::CropType;
use chrono::NaiveDate;
use serde::Serialize;

/// A recurring maintenance instruction, e.g. "apply NPK 16-16-8".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Stable within a run; assigned sequentially by the scheduler.
    pub id: u32,
    pub crop: CropType,
    pub content: String,
    /// Recurrence interval in days, at least 1.
    pub period_days: u32,
    pub start_date: NaiveDate,
}
