use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, is_memory_url, DbProfile};
use crate::error::AppError;

/// Open a pool for the profile's database. Does NOT run migrations.
///
/// In-memory SQLite lives and dies with its connection, so those pools are
/// pinned to exactly one.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let mut opts = ConnectOptions::new(url.clone());
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));

    if is_memory_url(&url) {
        opts.min_connections(1).max_connections(1);
    } else {
        opts.max_connections(10);
    }

    let conn = Database::connect(opts).await.map_err(|e| {
        AppError::db_unavailable(format!("failed to connect to {}: {e}", engine(&url)))
    })?;

    info!(profile = ?profile, engine = engine(&url), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("schema migration failed: {e}")))?;
    Ok(conn)
}

fn engine(url: &str) -> &'static str {
    if url.starts_with("postgres") {
        "postgresql"
    } else if url.starts_with("sqlite") {
        "sqlite"
    } else {
        "unknown"
    }
}
