mod html;
mod summary;

pub use html::dashboard;
pub use summary::cost_summary;
