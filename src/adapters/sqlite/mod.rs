//! SQLite database adapters for the sitegenome engagement engine.

pub mod badge_repository;
pub mod connection;
pub mod daily_task_repository;
pub mod migrations;
pub mod streak_repository;
pub mod website_profile_repository;

pub use badge_repository::SqliteBadgeRepository;
pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use daily_task_repository::SqliteDailyTaskRepository;
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use streak_repository::SqliteStreakRepository;
pub use website_profile_repository::SqliteWebsiteProfileRepository;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a UUID string from a SQLite row field.
pub fn parse_uuid(s: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Parse an optional UUID string from a SQLite row field.
pub fn parse_optional_uuid(s: Option<String>) -> DomainResult<Option<Uuid>> {
    s.map(|s| Uuid::parse_str(&s))
        .transpose()
        .map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Parse an RFC3339 datetime string from a SQLite row field.
pub fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse an optional RFC3339 datetime string from a SQLite row field.
pub fn parse_optional_datetime(s: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    s.map(|s| chrono::DateTime::parse_from_rfc3339(&s).map(|d| d.with_timezone(&Utc)))
        .transpose()
        .map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| DomainError::SerializationError(e.to_string()))
}

pub fn parse_optional_date(s: Option<String>) -> DomainResult<Option<NaiveDate>> {
    s.map(|s| parse_date(&s)).transpose()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Convert a non-negative SQLite integer to an unsigned count.
pub fn to_count<T: TryFrom<i64>>(value: i64) -> DomainResult<T> {
    T::try_from(value)
        .map_err(|_| DomainError::SerializationError(format!("Invalid count value: {value}")))
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

pub async fn initialize_database(database_url: &str, config: Option<PoolConfig>) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url, config).await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}

/// Create an in-memory test pool with all migrations applied.
pub async fn create_migrated_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}
