//! Website profile domain model.
//!
//! A profile is one analysis run against a URL. The user's own site is the
//! primary profile; competitor comparisons are stored alongside it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryScoreSet;

/// Lifecycle state of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub url: String,
    /// The user's own site, as opposed to a competitor comparison.
    pub is_primary: bool,
    pub status: ProfileStatus,
    pub overall_score: Option<f64>,
    pub category_scores: CategoryScoreSet,
    pub created_at: DateTime<Utc>,
}

impl WebsiteProfile {
    pub fn new(user_id: Uuid, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            url: url.into(),
            is_primary: true,
            status: ProfileStatus::Pending,
            overall_score: None,
            category_scores: CategoryScoreSet::default(),
            created_at: Utc::now(),
        }
    }

    pub fn competitor(mut self) -> Self {
        self.is_primary = false;
        self
    }

    /// Mark the analysis finished with its scores.
    pub fn completed(mut self, overall_score: Option<f64>, scores: CategoryScoreSet) -> Self {
        self.status = ProfileStatus::Completed;
        self.overall_score = overall_score;
        self.category_scores = scores;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProfileStatus::Completed
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Profile URL cannot be empty".to_string());
        }
        if let Some(score) = self.overall_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(format!("Overall score {score} is outside 0-100"));
            }
        }
        Ok(())
    }
}
