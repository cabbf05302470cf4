use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

/// The product store the service was started with.
pub struct ProductStore {
    pub repository: Arc<dyn ProductRepository>,
    /// "postgres" or "memory", reported by the health check
    pub kind: &'static str,
}

impl ProductStore {
    pub fn in_memory(repository: ProductRepositoryInMemory) -> Self {
        Self {
            repository: Arc::new(repository),
            kind: "memory",
        }
    }
}

/// Build the product store from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset, products live in
///   memory and are lost on restart.
/// - MIGRATIONS_PATH: directory with the SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if the database is configured but unreachable, or the
/// migrations fail
pub async fn init_repository() -> anyhow::Result<ProductStore> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, using the in-memory product store");
        return Ok(ProductStore::in_memory(ProductRepositoryInMemory::new()));
    };

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(ProductStore {
        repository: Arc::new(ProductRepositoryPostgres::new(pool)),
        kind: "postgres",
    })
}
