use crate::routes::common::store_failure;
use crate::schema::{self, RawRow};
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};

/// The canonical store in its five-column row shape, ready to be re-imported.
pub async fn export_journal(journal: web::Data<SharedJournal>) -> HttpResponse {
    let store = journal.lock().expect("journal mutex poisoned");
    match store.load() {
        Ok(entries) => {
            let rows: Vec<RawRow> = entries.iter().map(schema::to_row).collect();
            HttpResponse::Ok().json(rows)
        }
        Err(e) => store_failure(e),
    }
}
