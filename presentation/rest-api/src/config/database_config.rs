use persistence::db::{
    DEFAULT_MAX_CONNECTIONS, DatabaseConfig, create_postgres_pool, run_migrations,
};
use sqlx::PgPool;
use std::env;

use super::app_config::ConfigError;

/// Load database settings from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Migrations directory applied at startup (optional)
pub fn from_env() -> Result<DatabaseConfig, ConfigError> {
    let db_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;

    Ok(DatabaseConfig::new(db_url)
        .with_max_connections(max_connections)
        .with_migrations_path(env::var("DATABASE_MIGRATIONS_PATH").ok()))
}

fn parse_max_connections(raw: Option<String>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS")),
    }
}

/// Initialize the connection pool and apply pending migrations when configured
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;
    if let Some(path) = &config.migrations_path {
        run_migrations(&pool, path).await?;
    }
    Ok(pool)
}
