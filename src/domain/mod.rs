mod crop;
mod plot;
mod record;
mod reminder;
mod role;
mod status;
mod task;

pub use crop::CropType;
pub use plot::Plot;
pub use record::{JournalEntry, StatusReport, WorkRecord};
pub use reminder::Reminder;
pub use role::Role;
pub use status::{PlantStatus, STATUS_REPORT_PREFIX};
pub use task::{NO_TASKS_MARKER, TaskCategory};
