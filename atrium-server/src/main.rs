use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use atrium_config::Config;
use atrium_core::{seed, DocumentStore, MemoryStore, PgStore};
use atrium_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().context("failed to load configuration")?;
    config
        .uploads
        .ensure_directories()
        .context("failed to create upload directories")?;

    let store: Arc<dyn DocumentStore> = match &config.database.url {
        Some(url) => {
            let store = PgStore::connect(url)
                .await
                .context("failed to connect to the document store")?;
            tracing::info!("connected to Postgres document store");
            Arc::new(store)
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set; using the in-memory store \
                 (data will not survive a restart)"
            );
            Arc::new(MemoryStore::new())
        }
    };

    seed::initialize_database(
        &store,
        &config.seed.admin_username,
        &config.seed.admin_password,
    )
    .await
    .context("database initialization failed")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(store, config);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "atrium server started");
    axum::serve(listener, router)
        .await
        .context("server exited with an error")?;
    Ok(())
}
