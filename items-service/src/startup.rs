use crate::config::ItemsConfig;
use crate::handlers;
use crate::services::MongoDb;
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::metrics::metrics_endpoint;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Connect to the store, then bind the listener.
    ///
    /// Ordering matters: requests can only arrive once the store has answered
    /// a ping, so `/items` never races connection establishment. A store that
    /// is down at startup makes `build` fail instead of leaving a listening
    /// service that crashes on first query.
    pub async fn build(config: ItemsConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let state = AppState { db: db.clone() };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/items", get(handlers::list_items))
            .route("/metrics", get(metrics_endpoint))
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(metrics_middleware))
            .layer(from_fn(request_id_middleware))
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
