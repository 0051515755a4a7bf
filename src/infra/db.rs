use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use super::error::InfraError;

/// How long a request waits for a connection from a lazily opened pool.
const LAZY_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

pub async fn init_db(database_url: &SecretString, max_connections: u32) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url.expose_secret())
        .await?;

    info!("Connected to database!");
    Ok(pool)
}

/// Build a pool without connecting. Connection failures surface on first use.
pub fn init_db_lazy(database_url: &SecretString, max_connections: u32) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(LAZY_ACQUIRE_TIMEOUT)
        .connect_lazy(database_url.expose_secret())?;

    info!("Database pool created, connecting on demand");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(InfraError::Migration)?;

    info!("Database migrations applied");
    Ok(())
}
