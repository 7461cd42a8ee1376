//! Daily improvement task domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated improvement suggestion, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub text: String,
    pub category: String,
}

impl TaskSuggestion {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// A suggestion persisted for a user on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub website_profile_id: Option<Uuid>,
    pub text: String,
    pub category: String,
    pub completed: bool,
    pub created_date: NaiveDate,
    pub completed_at: Option<DateTime<Utc>>,
}

impl DailyTask {
    pub fn from_suggestion(
        user_id: Uuid,
        website_profile_id: Option<Uuid>,
        created_date: NaiveDate,
        suggestion: TaskSuggestion,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            website_profile_id,
            text: suggestion.text,
            category: suggestion.category,
            completed: false,
            created_date,
            completed_at: None,
        }
    }
}
