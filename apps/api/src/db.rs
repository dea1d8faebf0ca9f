use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates and returns a bounded PostgreSQL connection pool.
///
/// A request that needs a connection waits (asynchronously) up to the acquire
/// timeout for one to free up instead of opening unbounded new connections;
/// `statement_timeout` bounds how long any single query may run.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let options: PgConnectOptions = config.database_url.parse()?;
    let options = options.options([(
        "statement_timeout",
        format!("{}ms", config.db_statement_timeout_ms),
    )]);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_with(options)
        .await?;

    info!(
        "PostgreSQL connection pool established (max {} connections)",
        config.db_max_connections
    );
    Ok(pool)
}
