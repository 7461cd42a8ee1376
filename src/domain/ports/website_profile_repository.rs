//! Website profile repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CategoryScoreSet, WebsiteProfile};

/// Repository interface for analysis results.
#[async_trait]
pub trait WebsiteProfileRepository: Send + Sync {
    /// Store a new profile.
    async fn create(&self, profile: &WebsiteProfile) -> DomainResult<()>;

    /// Get a profile by ID.
    async fn get(&self, id: Uuid) -> DomainResult<Option<WebsiteProfile>>;

    /// All profiles of a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<WebsiteProfile>>;

    /// Mark a profile completed with its final scores.
    async fn set_completed(
        &self,
        id: Uuid,
        overall_score: Option<f64>,
        scores: &CategoryScoreSet,
    ) -> DomainResult<()>;

    /// Number of completed analyses for a user.
    async fn count_completed(&self, user_id: Uuid) -> DomainResult<u64>;

    /// Best overall score among completed analyses, if any were scored.
    async fn highest_score(&self, user_id: Uuid) -> DomainResult<Option<f64>>;
}
