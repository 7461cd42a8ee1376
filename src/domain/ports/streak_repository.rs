//! Streak repository port.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::StreakRecord;

#[async_trait]
pub trait StreakRepository: Send + Sync {
    /// Current record for a user; a zeroed record when none exists.
    async fn get(&self, user_id: Uuid) -> DomainResult<StreakRecord>;

    /// Record activity for `today` and return the updated record.
    ///
    /// Implementations must apply the read-advance-write atomically so that
    /// repeated or concurrent calls on the same day count once.
    async fn record_activity(&self, user_id: Uuid, today: NaiveDate) -> DomainResult<StreakRecord>;
}
