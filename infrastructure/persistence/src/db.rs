use std::{path::Path, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the catalog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Directory of SQL migrations applied at startup, if any.
    pub migrations_path: Option<String>,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
            migrations_path: None,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn with_migrations_path(mut self, migrations_path: Option<String>) -> Self {
        self.migrations_path = migrations_path.filter(|p| !p.trim().is_empty());
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Could not connect to the catalog database: {}", e);
            DatabaseError::ConnectionError
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        "Catalog database pool ready"
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        tracing::error!("Migrations directory {} does not exist", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration run failed: {}", e);
            DatabaseError::MigrationError
        })?;

    tracing::info!("Migrations applied from {}", migrations_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_five_connections_without_migrations() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string());
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.migrations_path.is_none());
    }

    #[test]
    fn should_ignore_blank_migrations_path_and_zero_pool_size() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string())
            .with_max_connections(0)
            .with_migrations_path(Some("  ".to_string()));
        assert_eq!(config.max_connections, 1);
        assert!(config.migrations_path.is_none());
    }
}
