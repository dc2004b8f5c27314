use crate::store::StoreError;
use actix_web::HttpResponse;
use std::fmt::Display;

/// Client-fault failures carry their human-readable cause in the body.
pub fn bad_request(error: impl Display) -> HttpResponse {
    HttpResponse::BadRequest().body(error.to_string())
}

pub fn store_failure(error: StoreError) -> HttpResponse {
    tracing::error!("journal store failure: {error}");
    HttpResponse::InternalServerError().body("Journal store failure. ".to_owned() + &error.to_string())
}
