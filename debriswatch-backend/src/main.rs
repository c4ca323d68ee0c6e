use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use debriswatch_backend::config::Config;
use debriswatch_backend::module::catalog::{
    CatalogManager, CelestrakClient, FileCacheStore,
};
use debriswatch_backend::server::{self, AppState};
use debriswatch_backend::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load("config.toml")?;

    // Initialize logging
    let _logging_guard = logging::init_logging("logs", "debriswatch-backend", &config.log_level);

    tracing::info!("DebrisWatch backend starting...");
    tracing::info!("Catalog endpoint: {}", config.catalog_base_url);

    let source = CelestrakClient::new(
        &config.catalog_base_url,
        Duration::from_secs(config.fetch_timeout_seconds),
    )
    .context("Failed to build catalog client")?;
    let cache = FileCacheStore::new(&config.cache_dir);

    let manager = CatalogManager::new(
        Arc::new(source),
        Arc::new(cache),
        chrono::Duration::hours(config.cache_max_age_hours as i64),
        config.serve_stale_on_error,
    );

    let state = Arc::new(AppState {
        manager,
        default_group: config.default_group.clone(),
    });
    let app = server::build_router(state, config.enable_cors);

    let addr = config.server_address();
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
