mod get;

pub use get::export_journal;
