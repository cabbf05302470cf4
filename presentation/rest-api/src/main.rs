use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: server, CORS, store and warehouse policy settings
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables so RUST_LOG from .env is honored
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        reserved_on_ship = %config.warehouse.reserved_on_ship,
        name_suffix = %config.warehouse.name_suffix,
        "warehouse policies loaded"
    );

    // 4. Initialize the product store
    let store = database_config::init_repository().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(store, config.warehouse);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
