use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, firebase_config::FirebaseConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: environment-driven settings (server, CORS, database, Firebase, image storage)
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration (FIREBASE_PROJECT_ID is required)
    let config = AppConfig::from_env();
    let firebase = FirebaseConfig::from_env()?;
    tracing::info!("verifying Firebase tokens for project {}", firebase.project_id);

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.storage);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
