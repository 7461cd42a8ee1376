//! SQLite implementation of the WebsiteProfileRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{parse_datetime, parse_uuid, to_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{CategoryScoreSet, ProfileStatus, WebsiteProfile};
use crate::domain::ports::WebsiteProfileRepository;

const PROFILE_COLUMNS: &str =
    "id, user_id, url, is_primary, status, overall_score, category_scores, created_at";

#[derive(Clone)]
pub struct SqliteWebsiteProfileRepository {
    pool: SqlitePool,
}

impl SqliteWebsiteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebsiteProfileRepository for SqliteWebsiteProfileRepository {
    async fn create(&self, profile: &WebsiteProfile) -> DomainResult<()> {
        let scores_json = serde_json::to_string(&profile.category_scores)?;

        sqlx::query(
            r"INSERT INTO website_profiles (id, user_id, url, is_primary, status, overall_score, category_scores, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(profile.id.to_string())
        .bind(profile.user_id.to_string())
        .bind(&profile.url)
        .bind(profile.is_primary)
        .bind(profile.status.as_str())
        .bind(profile.overall_score)
        .bind(&scores_json)
        .bind(profile.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<WebsiteProfile>> {
        let row: Option<ProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM website_profiles WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<WebsiteProfile>> {
        let rows: Vec<ProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM website_profiles WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn set_completed(
        &self,
        id: Uuid,
        overall_score: Option<f64>,
        scores: &CategoryScoreSet,
    ) -> DomainResult<()> {
        let scores_json = serde_json::to_string(scores)?;

        let result = sqlx::query(
            "UPDATE website_profiles SET status = ?, overall_score = ?, category_scores = ? WHERE id = ?",
        )
        .bind(ProfileStatus::Completed.as_str())
        .bind(overall_score)
        .bind(&scores_json)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound(id));
        }

        Ok(())
    }

    async fn count_completed(&self, user_id: Uuid) -> DomainResult<u64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM website_profiles WHERE user_id = ? AND status = 'completed'",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        to_count(count)
    }

    async fn highest_score(&self, user_id: Uuid) -> DomainResult<Option<f64>> {
        let (best,): (Option<f64>,) = sqlx::query_as(
            "SELECT MAX(overall_score) FROM website_profiles WHERE user_id = ? AND status = 'completed'",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(best)
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    url: String,
    is_primary: bool,
    status: String,
    overall_score: Option<f64>,
    category_scores: Option<String>,
    created_at: String,
}

impl TryFrom<ProfileRow> for WebsiteProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let status = ProfileStatus::from_str(&row.status)
            .ok_or_else(|| DomainError::SerializationError(format!("Invalid status: {}", row.status)))?;

        let category_scores = row
            .category_scores
            .as_deref()
            .map(CategoryScoreSet::from_json_str)
            .transpose()?
            .unwrap_or_default();

        Ok(WebsiteProfile {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            url: row.url,
            is_primary: row.is_primary,
            status,
            overall_score: row.overall_score,
            category_scores,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
