use crate::domain::{JournalEntry, Plot, TaskCategory, WorkRecord};
use crate::routes::common::{bad_request, store_failure};
use crate::scope::RoleScope;
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkRecord {
    /// Self-selected role.
    /// **Example:** `admin`, or `manager:coffee`
    pub role: String,

    /// Write target; required for admins, implicit for managers.
    pub plot: Option<Plot>,

    /// Defaults to today, the journal being a daily log.
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub tasks: BTreeSet<TaskCategory>,

    pub labor_count: u32,

    #[serde(default)]
    pub note: String,
}

pub async fn append_work_record(
    journal: web::Data<SharedJournal>,
    scope: web::Data<RoleScope>,
    body: web::Json<NewWorkRecord>,
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

    let record = WorkRecord {
        date: body.date.unwrap_or_else(|| Local::now().date_naive()),
        plot,
        tasks: body.tasks,
        labor_count: body.labor_count,
        note: body.note,
    };

    let store = journal.lock().expect("journal mutex poisoned");
    match store.append(JournalEntry::Work(record)) {
        Ok(()) => HttpResponse::Ok().body("Work record saved!"),
        Err(e) => store_failure(e),
    }
}
