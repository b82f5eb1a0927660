use anyhow::Result;
use mealdeck_shared::State;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::{str::FromStr, time::Duration};
use tracing::log::LevelFilter;

/// Connection settings shared by every pool, applied to each connection a
/// pool opens.
///
/// WAL lets `week` and `shopping list` read while a plan or a checked flag
/// is being saved.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug);

    Ok(options)
}

/// Pool for queries. The database file must already exist.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?.read_only(true))
        .await?;

    tracing::debug!(max_connections, "read pool ready");

    Ok(pool)
}

/// Single connection pool used by commands, so meal plans, recipes and
/// checked flags are never written concurrently.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::debug!("write pool ready");

    Ok(pool)
}

/// Creates the database file when missing. Used by `migrate` and `reset`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?.create_if_missing(true))
        .await?;

    tracing::debug!(max_connections, "pool ready");

    Ok(pool)
}

pub async fn create_state(database_url: &str, max_connections: u32) -> Result<State> {
    let write_db = create_write_pool(database_url).await?;
    let read_db = create_read_pool(database_url, max_connections).await?;

    Ok(State { read_db, write_db })
}
