use crate::aggregate::summarize;
use crate::routes::common::{bad_request, store_failure};
use crate::scope::RoleScope;
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SummaryQuery {
    pub role: String,
}

/// Labor cost grouped by date and plot, scoped to what the role may see.
pub async fn cost_summary(
    journal: web::Data<SharedJournal>,
    scope: web::Data<RoleScope>,
    query: web::Query<SummaryQuery>,
) -> HttpResponse {
    let role = match scope.resolve_role(&query.role) {
        Ok(role) => role,
        Err(e) => return bad_request(e),
    };
    let visible = scope.plots_visible_to(&role);

    let store = journal.lock().expect("journal mutex poisoned");
    let mut entries = match store.load() {
        Ok(entries) => entries,
        Err(e) => return store_failure(e),
    };
    entries.retain(|entry| visible.contains(entry.plot()));

    HttpResponse::Ok().json(summarize(&entries))
}
