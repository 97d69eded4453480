use std::env;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.unknown_product_store: {0}")]
    UnknownProductStore(String),
    #[error("config.database_url_missing")]
    DatabaseUrlMissing,
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
}

/// Backend holding the product collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStore {
    Postgres,
    Memory,
}

impl FromStr for ProductStore {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(ProductStore::Postgres),
            "memory" => Ok(ProductStore::Memory),
            other => Err(ConfigError::UnknownProductStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub store: ProductStore,
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load storage settings from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_STORE: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_URL: PostgreSQL connection string (required for "postgres")
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_MIGRATIONS: Migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        let store = env::var("PRODUCT_STORE")
            .map(|s| s.parse::<ProductStore>())
            .unwrap_or(Ok(ProductStore::Postgres))?;
        let url = env::var("DATABASE_URL").ok();
        if store == ProductStore::Postgres && url.is_none() {
            return Err(ConfigError::DatabaseUrlMissing);
        }
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidMaxConnections(raw))?,
            Err(_) => 5,
        };
        let migrations_path = env::var("DATABASE_MIGRATIONS")
            .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

        Ok(Self {
            store,
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Build the product repository selected by `settings`
///
/// # Errors
/// Returns error if the document store cannot be reached or migrated
pub async fn init_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match settings.store {
        ProductStore::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on restart");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
        ProductStore::Postgres => {
            let url = settings
                .url
                .clone()
                .ok_or(ConfigError::DatabaseUrlMissing)?;
            let config = DatabaseConfig::new(url).with_max_connections(settings.max_connections);
            let pool = create_postgres_pool(&config)
                .await
                .context("connecting to document store")?;
            run_migrations(&pool, &settings.migrations_path)
                .await
                .context("running migrations")?;
            tracing::info!("Connected to document store");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_product_store_case_insensitively() {
        assert_eq!("Memory".parse::<ProductStore>().unwrap(), ProductStore::Memory);
        assert_eq!(
            " postgres ".parse::<ProductStore>().unwrap(),
            ProductStore::Postgres
        );
    }

    #[test]
    fn should_reject_unknown_product_store() {
        assert!(matches!(
            "mongo".parse::<ProductStore>(),
            Err(ConfigError::UnknownProductStore(s)) if s == "mongo"
        ));
    }

    #[tokio::test]
    async fn should_build_in_memory_repository_without_database_url() {
        let settings = DatabaseSettings {
            store: ProductStore::Memory,
            url: None,
            max_connections: 5,
            migrations_path: String::new(),
        };

        let repository = init_repository(&settings).await.unwrap();

        assert!(repository.get_all().await.unwrap().is_empty());
    }
}
