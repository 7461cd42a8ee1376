//! SQLite database migration management.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to execute migration {version}: {source}")]
    ExecutionError { version: i64, #[source] source: sqlx::Error },
    #[error("Failed to get schema version: {0}")]
    VersionCheckError(#[source] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: String,
    pub sql: String,
}

pub struct Migrator {
    pool: SqlitePool,
}

impl Migrator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply every migration newer than the recorded schema version.
    pub async fn run_embedded_migrations(&self, migrations: Vec<Migration>) -> Result<usize, MigrationError> {
        self.ensure_migrations_table().await?;
        let current_version = self.get_current_version().await?;
        let pending: Vec<_> = migrations.into_iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            debug!(current_version, "schema up to date");
            return Ok(0);
        }

        for migration in &pending {
            self.apply_migration(migration).await?;
            info!(version = migration.version, description = %migration.description, "applied migration");
        }

        Ok(pending.len())
    }

    async fn ensure_migrations_table(&self) -> Result<(), MigrationError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now')),
                description TEXT
            )"
        )
        .execute(&self.pool)
        .await
        .map_err(|e| MigrationError::ExecutionError { version: 0, source: e })?;
        Ok(())
    }

    pub async fn get_current_version(&self) -> Result<i64, MigrationError> {
        let result: Option<(i64,)> = sqlx::query_as("SELECT COALESCE(MAX(version), 0) FROM schema_migrations")
            .fetch_optional(&self.pool)
            .await
            .map_err(MigrationError::VersionCheckError)?;
        Ok(result.map_or(0, |(v,)| v))
    }

    async fn apply_migration(&self, migration: &Migration) -> Result<(), MigrationError> {
        let version = migration.version;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| MigrationError::ExecutionError { version, source: e })?;

        sqlx::raw_sql(&migration.sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| MigrationError::ExecutionError { version, source: e })?;

        sqlx::query("INSERT INTO schema_migrations (version, description) VALUES (?, ?)")
            .bind(version)
            .bind(&migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| MigrationError::ExecutionError { version, source: e })?;

        tx.commit()
            .await
            .map_err(|e| MigrationError::ExecutionError { version, source: e })
    }
}

pub fn initial_schema_migration() -> Migration {
    Migration {
        version: 1,
        description: "Initial engagement schema".to_string(),
        sql: include_str!("../../../migrations/001_initial_schema.sql").to_string(),
    }
}

pub fn all_embedded_migrations() -> Vec<Migration> {
    vec![initial_schema_migration()]
}
