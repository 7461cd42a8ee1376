//! Recording completed website analyses.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{CategoryScoreSet, WebsiteProfile};
use crate::domain::ports::WebsiteProfileRepository;

pub struct AnalysisService {
    repository: Arc<dyn WebsiteProfileRepository>,
}

impl AnalysisService {
    pub fn new(repository: Arc<dyn WebsiteProfileRepository>) -> Self {
        Self { repository }
    }

    /// Store a finished analysis for `user_id`.
    pub async fn record_completed(
        &self,
        user_id: Uuid,
        url: String,
        is_primary: bool,
        overall_score: Option<f64>,
        scores: CategoryScoreSet,
    ) -> DomainResult<WebsiteProfile> {
        let mut pending = WebsiteProfile::new(user_id, url);
        pending.is_primary = is_primary;

        let check = pending.clone().completed(overall_score, scores.clone());
        check.validate().map_err(DomainError::ValidationFailed)?;

        self.repository.create(&pending).await?;
        self.repository
            .set_completed(pending.id, overall_score, &scores)
            .await?;
        let profile = self
            .repository
            .get(pending.id)
            .await?
            .ok_or(DomainError::ProfileNotFound(pending.id))?;

        info!(profile_id = %profile.id, %user_id, primary = is_primary, "recorded completed analysis");
        Ok(profile)
    }

    pub async fn list_profiles(&self, user_id: Uuid) -> DomainResult<Vec<WebsiteProfile>> {
        self.repository.list_for_user(user_id).await
    }
}
