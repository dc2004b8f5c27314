use crate::domain::{CropType, Role};
use crate::reminders::ReminderScheduler;
use crate::routes::common::bad_request;
use crate::scope::RoleScope;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Mutex;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub role: String,
    pub crop: CropType,

    /// The maintenance action.
    /// **Example:** `"apply NPK 16-16-8"`
    pub content: String,

    pub period_days: i64,
    pub start_date: NaiveDate,
}

pub async fn create_reminder(
    scope: web::Data<RoleScope>,
    scheduler: web::Data<Mutex<ReminderScheduler>>,
    body: web::Json<NewReminder>,
) -> HttpResponse {
    let body = body.into_inner();
    match scope.resolve_role(&body.role) {
        Ok(Role::Admin) => (),
        Ok(_) => {
            return HttpResponse::Forbidden()
                .body("Only the administrator can manage reminders.");
        }
        Err(e) => return bad_request(e),
    }

    let mut scheduler = scheduler.lock().expect("scheduler mutex poisoned");
    match scheduler.create(body.crop, body.content, body.period_days, body.start_date) {
        Ok(reminder) => HttpResponse::Ok().json(reminder),
        Err(e) => bad_request(e),
    }
}
