//! Read-side views over streaks and badges.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{BadgeDefinition, StreakRecord, BADGE_CATALOG};
use crate::domain::ports::{BadgeRepository, Clock, StreakRepository, SystemClock};

/// Streak as presented to the user on a given day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StreakSummary {
    pub record: StreakRecord,
    /// Zero once a day has been missed, even before the next update resets it.
    pub effective_streak: u32,
    pub active_today: bool,
    pub at_risk: bool,
}

/// A catalog badge and whether the user holds it.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeStatus {
    pub badge: &'static BadgeDefinition,
    pub glyph: &'static str,
    pub unlocked_at: Option<DateTime<Utc>>,
}

pub struct AchievementService {
    streaks: Arc<dyn StreakRepository>,
    badges: Arc<dyn BadgeRepository>,
    clock: Arc<dyn Clock>,
}

impl AchievementService {
    pub fn new(streaks: Arc<dyn StreakRepository>, badges: Arc<dyn BadgeRepository>) -> Self {
        Self {
            streaks,
            badges,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn streak(&self, user_id: Uuid) -> DomainResult<StreakSummary> {
        let record = self.streaks.get(user_id).await?;
        let today = self.clock.today();
        Ok(StreakSummary {
            record,
            effective_streak: record.effective_streak(today),
            active_today: record.is_active_today(today),
            at_risk: record.is_at_risk(today),
        })
    }

    /// Every catalog badge, in catalog order, with the user's unlock time.
    pub async fn badge_board(&self, user_id: Uuid) -> DomainResult<Vec<BadgeStatus>> {
        let unlocked = self.badges.list_unlocked(user_id).await?;

        Ok(BADGE_CATALOG
            .iter()
            .map(|badge| BadgeStatus {
                badge,
                glyph: badge.glyph(),
                unlocked_at: unlocked
                    .iter()
                    .find(|u| u.badge_id == badge.id)
                    .map(|u| u.unlocked_at),
            })
            .collect())
    }
}
