mod post;

pub use post::{import_append_dataset, import_replace_dataset};
