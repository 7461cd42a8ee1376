//! SQLite implementation of the StreakRepository.
//!
//! Activity is applied with a compare-and-swap on the previous row state so
//! that concurrent triggers on the same day advance the streak once.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::sqlite::{format_date, parse_optional_date, to_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::StreakRecord;
use crate::domain::ports::StreakRepository;

const MAX_CAS_ATTEMPTS: usize = 5;

#[derive(Clone)]
pub struct SqliteStreakRepository {
    pool: SqlitePool,
}

impl SqliteStreakRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, user_id: Uuid) -> DomainResult<Option<StreakRecord>> {
        let row: Option<StreakRow> = sqlx::query_as(
            "SELECT current_streak, longest_streak, last_active_date, total_active_days FROM user_streaks WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn try_insert(&self, user_id: Uuid, next: &StreakRecord) -> DomainResult<bool> {
        let result = sqlx::query(
            r"INSERT INTO user_streaks (user_id, current_streak, longest_streak, last_active_date, total_active_days, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id.to_string())
        .bind(i64::from(next.current_streak))
        .bind(i64::from(next.longest_streak))
        .bind(next.last_active_date.map(format_date))
        .bind(i64::from(next.total_active_days))
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn try_replace(&self, user_id: Uuid, previous: &StreakRecord, next: &StreakRecord) -> DomainResult<bool> {
        let result = sqlx::query(
            r"UPDATE user_streaks
              SET current_streak = ?, longest_streak = ?, last_active_date = ?, total_active_days = ?, updated_at = ?
              WHERE user_id = ? AND last_active_date IS ? AND current_streak = ? AND total_active_days = ?",
        )
        .bind(i64::from(next.current_streak))
        .bind(i64::from(next.longest_streak))
        .bind(next.last_active_date.map(format_date))
        .bind(i64::from(next.total_active_days))
        .bind(Utc::now().to_rfc3339())
        .bind(user_id.to_string())
        .bind(previous.last_active_date.map(format_date))
        .bind(i64::from(previous.current_streak))
        .bind(i64::from(previous.total_active_days))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl StreakRepository for SqliteStreakRepository {
    async fn get(&self, user_id: Uuid) -> DomainResult<StreakRecord> {
        Ok(self.fetch(user_id).await?.unwrap_or_default())
    }

    async fn record_activity(&self, user_id: Uuid, today: NaiveDate) -> DomainResult<StreakRecord> {
        for attempt in 1..=MAX_CAS_ATTEMPTS {
            let stored = self.fetch(user_id).await?;
            let previous = stored.unwrap_or_default();
            let next = previous.advance(today);

            if stored.is_some() && next == previous {
                return Ok(previous);
            }

            let written = match stored {
                None => self.try_insert(user_id, &next).await?,
                Some(ref prev) => self.try_replace(user_id, prev, &next).await?,
            };

            if written {
                return Ok(next);
            }
            debug!(%user_id, attempt, "streak row changed underneath update, retrying");
        }

        Err(DomainError::ConcurrencyConflict {
            entity: "user_streak".to_string(),
            id: user_id.to_string(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct StreakRow {
    current_streak: i64,
    longest_streak: i64,
    last_active_date: Option<String>,
    total_active_days: i64,
}

impl TryFrom<StreakRow> for StreakRecord {
    type Error = DomainError;

    fn try_from(row: StreakRow) -> Result<Self, Self::Error> {
        Ok(StreakRecord {
            current_streak: to_count(row.current_streak)?,
            longest_streak: to_count(row.longest_streak)?,
            last_active_date: parse_optional_date(row.last_active_date)?,
            total_active_days: to_count(row.total_active_days)?,
        }
        .normalized())
    }
}
