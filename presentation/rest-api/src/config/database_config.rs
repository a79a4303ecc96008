use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, required_var};

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: migrations directory applied on startup
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or migrations fail
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = required_var("DATABASE_URL")?;
    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max = raw
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS"))?;
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("database ready, migrations applied from {migrations_path}");

    Ok(pool)
}
