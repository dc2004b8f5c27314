//! Recurring maintenance reminders and their due-status computation.

use crate::domain::{CropType, Reminder};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("recurrence period must be at least 1 day, got {0}")]
    InvalidPeriod(i64),
}

/// Where a reminder stands relative to its recurrence schedule on a given
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "days", rename_all = "camelCase")]
pub enum DueStatus {
    /// The start date lies in the future.
    NotYetStarted,
    DueToday,
    DueIn(u32),
}

/// Session-scoped reminder store. Ids are stable within a run and assigned
/// in creation order; reminders are never deleted.
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    next_id: u32,
    reminders: Vec<Reminder>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        crop: CropType,
        content: String,
        period_days: i64,
        start_date: NaiveDate,
    ) -> Result<Reminder, ValidationError> {
        let period_days = u32::try_from(period_days)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(ValidationError::InvalidPeriod(period_days))?;

        self.next_id += 1;
        let reminder = Reminder {
            id: self.next_id,
            crop,
            content,
            period_days,
            start_date,
        };
        self.reminders.push(reminder.clone());
        Ok(reminder)
    }

    /// All reminders in creation order.
    pub fn all(&self) -> &[Reminder] {
        &self.reminders
    }
}

/// Computes where `as_of` falls in the reminder's recurrence cycle: on a
/// cycle boundary the reminder is due that very day, otherwise it is due
/// again when the current cycle completes.
pub fn due_status(reminder: &Reminder, as_of: NaiveDate) -> DueStatus {
    let elapsed = (as_of - reminder.start_date).num_days();
    if elapsed < 0 {
        return DueStatus::NotYetStarted;
    }
    let period = i64::from(reminder.period_days);
    let into_cycle = elapsed % period;
    if into_cycle == 0 {
        DueStatus::DueToday
    } else {
        DueStatus::DueIn((period - into_cycle) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fortnightly(start: &str) -> Reminder {
        Reminder {
            id: 1,
            crop: CropType::Durian,
            content: "apply NPK 16-16-8".to_owned(),
            period_days: 14,
            start_date: start.parse().unwrap(),
        }
    }

    #[test]
    fn creation_rejects_periods_below_one_day() {
        let mut scheduler = ReminderScheduler::new();
        let start = "2024-01-01".parse().unwrap();
        assert_eq!(
            scheduler
                .create(CropType::Coffee, "prune".into(), 0, start)
                .unwrap_err(),
            ValidationError::InvalidPeriod(0)
        );
        assert_eq!(
            scheduler
                .create(CropType::Coffee, "prune".into(), -7, start)
                .unwrap_err(),
            ValidationError::InvalidPeriod(-7)
        );
        assert!(scheduler.all().is_empty());
    }

    #[test]
    fn ids_are_sequential_and_order_is_preserved() {
        let mut scheduler = ReminderScheduler::new();
        let start = "2024-01-01".parse().unwrap();
        let first = scheduler
            .create(CropType::Durian, "spray".into(), 7, start)
            .unwrap();
        let second = scheduler
            .create(CropType::Mango, "prune".into(), 30, start)
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(scheduler.all().len(), 2);
        assert_eq!(scheduler.all()[0].content, "spray");
    }

    #[test]
    fn due_on_the_start_date() {
        let reminder = fortnightly("2024-01-01");
        assert_eq!(
            due_status(&reminder, "2024-01-01".parse().unwrap()),
            DueStatus::DueToday
        );
    }

    #[test]
    fn due_again_when_the_cycle_completes() {
        let reminder = fortnightly("2024-01-01");
        assert_eq!(
            due_status(&reminder, "2024-01-10".parse().unwrap()),
            DueStatus::DueIn(5)
        );
    }

    #[test]
    fn not_yet_started_before_the_start_date() {
        let reminder = fortnightly("2024-01-01");
        assert_eq!(
            due_status(&reminder, "2023-12-31".parse().unwrap()),
            DueStatus::NotYetStarted
        );
    }

    #[test]
    fn due_on_every_cycle_boundary() {
        let reminder = fortnightly("2024-01-01");
        assert_eq!(
            due_status(&reminder, "2024-01-29".parse().unwrap()),
            DueStatus::DueToday
        );
        assert_eq!(
            due_status(&reminder, "2024-01-30".parse().unwrap()),
            DueStatus::DueIn(13)
        );
    }
}
