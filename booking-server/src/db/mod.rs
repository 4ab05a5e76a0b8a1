//! Database Module
//!
//! Handles SQLite connection pool and migrations

pub mod repository;

use shared::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service — owns a SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file in WAL mode and apply migrations
    ///
    /// `busy_timeout` is set per connection so every pooled connection waits
    /// for the writer lock instead of failing with `SQLITE_BUSY`.
    pub async fn new(
        db_path: &str,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(busy_timeout)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(busy_timeout * 2)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %db_path,
            max_connections,
            busy_timeout_ms = busy_timeout.as_millis() as u64,
            "Database connection established (SQLite WAL)"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Round-trip a trivial query; used by the health endpoint
    pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
    }
}
