mod model;
mod server;

use axum::{extract::Request, ServiceExt};
use dioxus_logger::tracing;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level).map_err(|e| ConfigError::Logger(e.to_string()))?;

    let db = startup::connect_to_database(&config).await?;

    // Trailing slashes are trimmed before routing, so the layer wraps the router.
    let app = NormalizePathLayer::trim_trailing_slash().layer(router::app(AppState::new(db)));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Starting server on {}", config.bind_address());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
