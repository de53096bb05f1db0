use anyhow::{Context, Result};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::{self, setup::ensure_schema};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let settings = &self.config.database;
        let pool = database::create_pool(&settings.path, settings.max_connections)?;
        {
            let conn = database::get_connection(&pool)?;
            ensure_schema(&conn)?;
        }
        info!("Using database {}", settings.path);

        let state = Arc::new(AppState::new(pool, self.config.clone()));
        let app = build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Router with request logging and permissive CORS.
pub fn build_app(state: Arc<AppState>) -> Router {
    create_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_request))
            .layer(CorsLayer::permissive()),
    )
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
