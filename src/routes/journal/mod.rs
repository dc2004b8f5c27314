mod get;
mod post;

pub use get::list_journal;
pub use post::append_work_record;
