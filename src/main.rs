use std::sync::Arc;

use actix_files as fs;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use horoscope_web::config::AppConfig;
use horoscope_web::model::AzureOpenAiClient;
use horoscope_web::web::routes;
use horoscope_web::{load_templates, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting horoscope web application");

    let config = AppConfig::from_env();
    let missing = config.missing_azure_settings();
    if !missing.is_empty() {
        warn!(
            "Azure OpenAI settings not set: {}; horoscope requests will fail until they are",
            missing.join(", ")
        );
    }

    let tera = load_templates(&config.server.template_dir).context("Template parsing error")?;

    let client = Arc::new(AzureOpenAiClient::new(config.azure.clone()));
    let app_state = Data::new(
        AppState::new(tera, client).with_output_validation(config.validate_output),
    );

    let static_dir = config.server.static_dir.clone();
    let bind = (config.server.host.clone(), config.server.port);
    info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
