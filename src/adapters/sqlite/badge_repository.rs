//! SQLite implementation of the BadgeRepository.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::UnlockedBadge;
use crate::domain::ports::BadgeRepository;

#[derive(Clone)]
pub struct SqliteBadgeRepository {
    pool: SqlitePool,
}

impl SqliteBadgeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BadgeRepository for SqliteBadgeRepository {
    async fn unlocked_ids(&self, user_id: Uuid) -> DomainResult<HashSet<String>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT badge_id FROM user_badges WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn list_unlocked(&self, user_id: Uuid) -> DomainResult<Vec<UnlockedBadge>> {
        let rows: Vec<BadgeRow> = sqlx::query_as(
            "SELECT user_id, badge_id, unlocked_at FROM user_badges WHERE user_id = ? ORDER BY unlocked_at, badge_id",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn unlock(&self, user_id: Uuid, badge_id: &str, at: DateTime<Utc>) -> DomainResult<bool> {
        let result = sqlx::query(
            r"INSERT INTO user_badges (user_id, badge_id, unlocked_at) VALUES (?, ?, ?)
              ON CONFLICT(user_id, badge_id) DO NOTHING",
        )
        .bind(user_id.to_string())
        .bind(badge_id)
        .bind(at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[derive(sqlx::FromRow)]
struct BadgeRow {
    user_id: String,
    badge_id: String,
    unlocked_at: String,
}

impl TryFrom<BadgeRow> for UnlockedBadge {
    type Error = DomainError;

    fn try_from(row: BadgeRow) -> Result<Self, Self::Error> {
        Ok(UnlockedBadge {
            user_id: parse_uuid(&row.user_id)?,
            badge_id: row.badge_id,
            unlocked_at: parse_datetime(&row.unlocked_at)?,
        })
    }
}
