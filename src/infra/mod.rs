use secrecy::SecretString;

use crate::{adapters::persistence::PostgresPersistence, infra::db::{init_db, init_db_lazy}};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod http_client;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(database_url, max_connections).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}

/// Like `postgres_persistence`, but without touching the network.
pub fn lazy_postgres_persistence(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<PostgresPersistence, InfraError> {
    Ok(PostgresPersistence::new(init_db_lazy(database_url, max_connections)?))
}
