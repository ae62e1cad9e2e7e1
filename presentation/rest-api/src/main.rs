use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod catalog {
        pub mod dto;
        pub mod handlers;
        pub mod responses;
    }
    pub mod course {
        pub mod dto;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod media {
        pub mod dto;
        pub mod routes;
    }
    pub mod seminar {
        pub mod dto;
        pub mod routes;
    }
    pub mod training_session {
        pub mod dto;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod media_service_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog service entry point
///
/// Loads configuration, connects to Postgres, wires the catalog families
/// and serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.media_service)?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
