use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod retriever;
mod service;
#[cfg(test)]
mod test_support;

use api::error::json_error_handler;
use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let state = AppState::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let engine = web::Data::from(state.engine);

    tracing::info!("Starting Trust Lens server on {}", state.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(api::health::configure)
            .configure(api::analyze::configure)
            .configure(api::summary::configure)
            .configure(api::openapi::configure)
    })
    .bind(state.bind_addr)?
    .run()
    .await
}
