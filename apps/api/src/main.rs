mod config;
mod contact;
mod db;
mod errors;
mod models;
mod portfolio;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::store::{ContactStore, MemoryContactStore, PgContactStore};
use crate::db::{create_pool, init_schema};
use crate::portfolio::data::default_portfolio;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the contact store (Postgres when configured, in-memory otherwise)
    let store: Arc<dyn ContactStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            init_schema(&pool).await?;
            info!("Contact store backend: postgres");
            Arc::new(PgContactStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set; contact store backend: in-memory");
            Arc::new(MemoryContactStore::new())
        }
    };

    // Portfolio content is static, built once and shared read-only
    let portfolio = Arc::new(default_portfolio());

    let state = AppState { store, portfolio };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
