mod get;
mod post;

pub use get::list_reminders;
pub use post::create_reminder;
