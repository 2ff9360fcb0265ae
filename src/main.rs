//! Biblioteca Server - library management REST API
//!
//! Serves patrons, books and loans from in-memory collections.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{
    api,
    config::{AppConfig, LoggingConfig, StorageConfig},
    repository::{Repository, SeedData},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Create and seed the in-memory repository
    let repository = Repository::new();
    seed_repository(&repository, &config.storage);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(config, repository);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteca_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn seed_repository(repository: &Repository, storage: &StorageConfig) {
    if storage.seed_demo_data {
        let inserted = repository.seed(SeedData::demo());
        tracing::info!("Loaded {} demo records", inserted);
    }

    if let Some(path) = &storage.seed_file {
        match SeedData::from_file(path) {
            Ok(data) => {
                let total = data.len();
                let inserted = repository.seed(data);
                tracing::info!("Loaded {}/{} records from {}", inserted, total, path);
            }
            Err(e) => tracing::warn!("Could not load seed file {}: {}", path, e),
        }
    }
}
