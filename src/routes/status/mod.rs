mod post;

pub use post::append_status_report;
