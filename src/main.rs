use anyhow::Context;
use eventex::startup::Application;
use eventex::{configuration::get_configuration, telemetry::*};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("eventex".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    Application::build(configuration)
        .await?
        .run_until_stopped()
        .await?;
    Ok(())
}
