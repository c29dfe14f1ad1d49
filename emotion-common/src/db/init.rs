//! Database initialization
//!
//! Opens (creating if needed) the SQLite database and ensures the
//! `emotion_records` table exists. Safe to run on every startup.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// How long a connection waits on a locked database before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Connect options apply to every pooled connection.
    // WAL allows concurrent readers alongside the single writer
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_emotion_records_table(&pool).await?;

    Ok(pool)
}

/// Initialize a private in-memory database with the same schema
///
/// The pool holds exactly one connection that never expires: every
/// in-memory SQLite connection is its own database.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await?;

    create_emotion_records_table(&pool).await?;

    Ok(pool)
}

async fn create_emotion_records_table(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT: ids of deleted records are never handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS emotion_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            modality TEXT,
            emotion TEXT,
            confidence REAL NOT NULL DEFAULT 0,
            source_file TEXT,
            timestamp TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
