use persistence::db::DatabaseConfig;
use poem::middleware::Cors;

use super::{
    cors_config, database_config, media_service_config::MediaServiceConfig,
    server_config::ServerConfig,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has an invalid value")]
    Invalid(&'static str),
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseConfig,
    pub media_service: MediaServiceConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: database_config::from_env()?,
            media_service: MediaServiceConfig::from_env()?,
        })
    }
}
