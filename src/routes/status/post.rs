use crate::domain::{JournalEntry, PlantStatus, Plot, StatusReport};
use crate::routes::common::{bad_request, store_failure};
use crate::scope::RoleScope;
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStatusReport {
    pub role: String,
    pub plot: Option<Plot>,
    pub date: Option<NaiveDate>,
    pub status: PlantStatus,
    #[serde(default)]
    pub note: String,
}

/// Status reports share the journal table with work records but never carry
/// labor; the same write-scoping rules apply.
pub async fn append_status_report(
    journal: web::Data<SharedJournal>,
    scope: web::Data<RoleScope>,
    body: web::Json<NewStatusReport>,
) -> HttpResponse {
    let body = body.into_inner();
    let role = match scope.resolve_role(&body.role) {
        Ok(role) => role,
        Err(e) => return bad_request(e),
    };
    let plot = match scope.write_plot(&role, body.plot.as_ref()) {
        Ok(plot) => plot,
        Err(e) => return bad_request(e),
    };

    let report = StatusReport {
        date: body.date.unwrap_or_else(|| Local::now().date_naive()),
        plot,
        status: body.status,
        note: body.note,
    };

    let store = journal.lock().expect("journal mutex poisoned");
    match store.append(JournalEntry::Status(report)) {
        Ok(()) => HttpResponse::Ok().body("Status report saved!"),
        Err(e) => store_failure(e),
    }
}
