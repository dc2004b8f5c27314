use crate::aggregate::{CostSummary, summarize};
use crate::routes::common::{bad_request, store_failure};
use crate::scope::RoleScope;
use crate::store::SharedJournal;
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardHtml {
    summaries: Vec<CostSummary>,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub role: String,
}

pub async fn dashboard(
    journal: web::Data<SharedJournal>,
    scope: web::Data<RoleScope>,
    query: web::Query<DashboardQuery>,
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

    DashboardHtml {
        summaries: summarize(&entries),
    }
    .to_response()
}
