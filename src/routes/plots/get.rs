use crate::routes::common::bad_request;
use crate::scope::RoleScope;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlotsQuery {
    pub role: String,
}

pub async fn list_plots(scope: web::Data<RoleScope>, query: web::Query<PlotsQuery>) -> HttpResponse {
    match scope.resolve_role(&query.role) {
        Ok(role) => HttpResponse::Ok().json(scope.plots_visible_to(&role)),
        Err(e) => bad_request(e),
    }
}
