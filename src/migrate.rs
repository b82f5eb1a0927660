//! Database migration utilities

use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::{Migrate, Plan};

use crate::Config;

/// Create the database when missing and apply every pending migration.
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.database.url, "Running database migrations");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let mut conn = pool.acquire().await?;
    mealdeck_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists, then migrate from scratch.
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!(url = %config.database.url, "Dropping existing database");
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}
