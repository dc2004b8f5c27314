mod get;

pub use get::list_plots;
