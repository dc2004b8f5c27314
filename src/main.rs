use dotenv::dotenv;
use farmhand::configuration::get_configuration;
use farmhand::startup::Application;
use farmhand::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!("farmhand listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
