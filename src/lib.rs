pub mod aggregate;
pub mod configuration;
pub mod cost;
pub mod domain;
pub mod import;
pub mod reminders;
pub mod routes;
pub mod schema;
pub mod scope;
pub mod startup;
pub mod store;
pub mod telemetry;
