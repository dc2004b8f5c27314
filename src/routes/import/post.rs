use crate::import::{ImportError, import_append, import_replace};
use crate::routes::common::bad_request;
use crate::schema::RawRow;
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<RawRow>,
}

/// Replaces the whole journal with the uploaded dataset. Prior history is
/// discarded; the destructive flavor is spelled out in the route name.
pub async fn import_replace_dataset(
    journal: web::Data<SharedJournal>,
    body: web::Json<ImportRequest>,
) -> HttpResponse {
    let store = journal.lock().expect("journal mutex poisoned");
    respond(import_replace(store.as_ref(), &body.rows), "replaced")
}

pub async fn import_append_dataset(
    journal: web::Data<SharedJournal>,
    body: web::Json<ImportRequest>,
) -> HttpResponse {
    let store = journal.lock().expect("journal mutex poisoned");
    respond(import_append(store.as_ref(), &body.rows), "appended")
}

fn respond(result: Result<usize, ImportError>, verb: &str) -> HttpResponse {
    match result {
        Ok(count) => HttpResponse::Ok().body(format!("Dataset accepted: {count} rows {verb}.")),
        Err(ImportError::Store(e)) => crate::routes::common::store_failure(e),
        Err(e) => bad_request(e),
    }
}
