//! Wiring of SQLite adapters into services for a single CLI invocation.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::adapters::notifications::TracingNotifier;
use crate::adapters::sqlite::{
    initialize_database, PoolConfig, SqliteBadgeRepository, SqliteDailyTaskRepository,
    SqliteStreakRepository, SqliteWebsiteProfileRepository,
};
use crate::domain::models::Config;
use crate::services::{AchievementService, AnalysisService, GamificationTrigger, TaskService};

pub struct AppContext {
    pub config: Config,
    pub pool: SqlitePool,
}

impl AppContext {
    /// Open (and migrate) the configured database.
    pub async fn open(config: Config) -> Result<Self> {
        let pool = initialize_database(
            &config.database.url(),
            Some(PoolConfig::from(&config.database)),
        )
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}. Run 'sitegenome init' first.",
                config.database.path
            )
        })?;

        Ok(Self { config, pool })
    }

    pub fn analysis_service(&self) -> AnalysisService {
        AnalysisService::new(Arc::new(SqliteWebsiteProfileRepository::new(self.pool.clone())))
    }

    pub fn task_service(&self) -> TaskService {
        TaskService::new(Arc::new(SqliteDailyTaskRepository::new(self.pool.clone())))
    }

    pub fn achievement_service(&self) -> AchievementService {
        AchievementService::new(
            Arc::new(SqliteStreakRepository::new(self.pool.clone())),
            Arc::new(SqliteBadgeRepository::new(self.pool.clone())),
        )
    }

    pub fn gamification_trigger(&self) -> GamificationTrigger {
        GamificationTrigger::new(
            Arc::new(SqliteWebsiteProfileRepository::new(self.pool.clone())),
            Arc::new(SqliteStreakRepository::new(self.pool.clone())),
            Arc::new(SqliteDailyTaskRepository::new(self.pool.clone())),
            Arc::new(SqliteBadgeRepository::new(self.pool.clone())),
            Arc::new(TracingNotifier),
        )
        .with_config(self.config.gamification.clone())
    }
}
