use dotenvy::dotenv;
use service_core::metrics::init_metrics;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tracing::info;
use web_frontend::config::get_configuration;
use web_frontend::services::ItemsClient;
use web_frontend::startup::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("web-frontend", "info");
    init_metrics();

    let items_client = Arc::new(ItemsClient::new(configuration.api_url.clone()));
    info!(api_url = %items_client.base_url(), "Items API target configured");

    let app = build_router(AppState { items_client });

    let address = format!("{}:{}", configuration.host, configuration.port);
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting web-frontend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
