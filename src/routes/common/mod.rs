mod respond;

pub use respond::{bad_request, store_failure};
