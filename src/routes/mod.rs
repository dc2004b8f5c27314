mod common;
mod dashboard;
mod export;
mod import;
mod journal;
mod plots;
mod reminders;
mod status;

pub use dashboard::{cost_summary, dashboard};
pub use export::export_journal;
pub use import::{import_append_dataset, import_replace_dataset};
pub use journal::{append_work_record, list_journal};
pub use plots::list_plots;
pub use reminders::{create_reminder, list_reminders};
pub use status::append_status_report;
