//! SQLite persistence for imported characters.
//!
//! The whole store is one `characters` table. [`create_pool`] opens (and
//! creates if missing) the database file, [`run_migrations`] applies the
//! embedded schema, and [`repositories::CharacterRepo`] provides every read
//! and write the rest of the workspace needs.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL such as
/// `sqlite://characters.db` or `sqlite::memory:`.
///
/// The pool holds a single connection: SQLite serializes writers anyway,
/// and an in-memory database only exists for the connection that created it.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open a private in-memory store with the schema applied.
///
/// Every call yields an independent database, which is what tests want.
pub async fn open_in_memory() -> Result<DbPool, sqlx::Error> {
    let pool = create_pool("sqlite::memory:").await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
