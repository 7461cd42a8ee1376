//! Common test utilities for integration tests
//!
//! Builds an in-memory SQLite-backed engagement pipeline pinned to a fixed day.

use std::sync::Arc;

use chrono::NaiveDate;
use sitegenome::adapters::notifications::CollectingNotifier;
use sitegenome::adapters::sqlite::{
    create_migrated_test_pool, SqliteBadgeRepository, SqliteDailyTaskRepository,
    SqliteStreakRepository, SqliteWebsiteProfileRepository,
};
use sitegenome::domain::models::{CategoryScoreSet, GamificationConfig, WebsiteProfile};
use sitegenome::domain::ports::{FixedClock, WebsiteProfileRepository};
use sitegenome::services::GamificationTrigger;
use uuid::Uuid;

pub struct Harness {
    pub profiles: Arc<SqliteWebsiteProfileRepository>,
    pub streaks: Arc<SqliteStreakRepository>,
    pub tasks: Arc<SqliteDailyTaskRepository>,
    pub badges: Arc<SqliteBadgeRepository>,
    pub notifier: CollectingNotifier,
}

impl Harness {
    pub async fn new() -> Self {
        let pool = create_migrated_test_pool().await.expect("test pool");
        Self {
            profiles: Arc::new(SqliteWebsiteProfileRepository::new(pool.clone())),
            streaks: Arc::new(SqliteStreakRepository::new(pool.clone())),
            tasks: Arc::new(SqliteDailyTaskRepository::new(pool.clone())),
            badges: Arc::new(SqliteBadgeRepository::new(pool)),
            notifier: CollectingNotifier::new(),
        }
    }

    /// Trigger whose clock reads noon UTC on `today`.
    pub fn trigger_on(&self, today: NaiveDate) -> GamificationTrigger {
        self.trigger_with(today, GamificationConfig::default())
    }

    #[allow(dead_code)]
    pub fn trigger_with(&self, today: NaiveDate, config: GamificationConfig) -> GamificationTrigger {
        GamificationTrigger::new(
            self.profiles.clone(),
            self.streaks.clone(),
            self.tasks.clone(),
            self.badges.clone(),
            Arc::new(self.notifier.clone()),
        )
        .with_clock(Arc::new(FixedClock::on(today)))
        .with_config(config)
    }

    /// Persist a completed analysis of the user's own site.
    pub async fn completed_primary(
        &self,
        user_id: Uuid,
        overall: f64,
        scores: CategoryScoreSet,
    ) -> WebsiteProfile {
        let profile = WebsiteProfile::new(user_id, "https://example.com").completed(Some(overall), scores);
        self.profiles.create(&profile).await.expect("insert profile");
        profile
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub fn weak_findability_scores() -> CategoryScoreSet {
    CategoryScoreSet::new()
        .with_score("findability", 20.0)
        .with_score("offerClarity", 45.0)
        .with_score("trustProof", 90.0)
        .with_score("conversionReadiness", 70.0)
        .with_score("mobileUsability", 85.0)
}
