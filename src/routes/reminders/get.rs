use crate::domain::{Reminder, Role};
use crate::reminders::{DueStatus, ReminderScheduler, due_status};
use crate::routes::common::bad_request;
use crate::scope::RoleScope;
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersQuery {
    pub role: String,
    /// Reference date for the due-status computation; defaults to today.
    pub as_of: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderView {
    #[serde(flatten)]
    reminder: Reminder,
    due: DueStatus,
}

/// All reminders in creation order, each with its computed due status.
pub async fn list_reminders(
    scope: web::Data<RoleScope>,
    scheduler: web::Data<Mutex<ReminderScheduler>>,
    query: web::Query<RemindersQuery>,
) -> HttpResponse {
    match scope.resolve_role(&query.role) {
        Ok(Role::Admin) => (),
        Ok(_) => {
            return HttpResponse::Forbidden()
                .body("Only the administrator can manage reminders.");
        }
        Err(e) => return bad_request(e),
    }

    let as_of = query.as_of.unwrap_or_else(|| Local::now().date_naive());
    let scheduler = scheduler.lock().expect("scheduler mutex poisoned");
    let views: Vec<ReminderView> = scheduler
        .all()
        .iter()
        .map(|reminder| ReminderView {
            reminder: reminder.clone(),
            due: due_status(reminder, as_of),
        })
        .collect();

    HttpResponse::Ok().json(views)
}
