use crate::configuration::Settings;
use crate::domain::Plot;
use crate::reminders::ReminderScheduler;
use crate::routes::{
    append_status_report, append_work_record, cost_summary, create_reminder, dashboard,
    export_journal, import_append_dataset, import_replace_dataset, list_journal, list_plots,
    list_reminders,
};
use crate::scope::RoleScope;
use crate::store::{FileStore, SharedJournal};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let journal: SharedJournal = Arc::new(Mutex::new(Box::new(FileStore::new(
            &configuration.store.journal_path,
        ))));
        let scope = RoleScope::new(configuration.plots.into_iter().map(Plot::new).collect());

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, journal, scope).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: TcpListener,
    journal: SharedJournal,
    scope: RoleScope,
) -> Result<Server, anyhow::Error> {
    let journal = Data::new(journal);
    let scope = Data::new(scope);
    // Reminders are session-scoped: they live exactly as long as the server.
    let scheduler = Data::new(Mutex::new(ReminderScheduler::new()));
    let server = HttpServer::new(move || {
        App::new()
            .route("journal", web::post().to(append_work_record))
            .route("journal", web::get().to(list_journal))
            .route("status", web::post().to(append_status_report))
            .route("summary", web::get().to(cost_summary))
            .route("dashboard", web::get().to(dashboard))
            .route("plots", web::get().to(list_plots))
            .route("reminders", web::post().to(create_reminder))
            .route("reminders", web::get().to(list_reminders))
            .route("import/replace", web::post().to(import_replace_dataset))
            .route("import/append", web::post().to(import_append_dataset))
            .route("export", web::get().to(export_journal))
            .app_data(journal.clone())
            .app_data(scope.clone())
            .app_data(scheduler.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
