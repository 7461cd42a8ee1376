//! Badge unlock repository port.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::UnlockedBadge;

#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// IDs of badges the user already holds.
    async fn unlocked_ids(&self, user_id: Uuid) -> DomainResult<HashSet<String>>;

    /// Unlock records for the user, oldest first.
    async fn list_unlocked(&self, user_id: Uuid) -> DomainResult<Vec<UnlockedBadge>>;

    /// Insert an unlock unless one already exists for (user, badge).
    ///
    /// Returns `true` only when this call created the row. A conflicting
    /// insert is not an error.
    async fn unlock(&self, user_id: Uuid, badge_id: &str, at: DateTime<Utc>) -> DomainResult<bool>;
}
