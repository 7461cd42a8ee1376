//! Badge definitions and unlock records.
//!
//! The badge catalog is a fixed, process-wide table. Each badge carries a
//! single numeric threshold over the user's accumulated statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stats::UserStats;

/// Threshold condition a badge is unlocked by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "threshold")]
pub enum BadgeCondition {
    /// Completed analyses at or above the threshold.
    ScanCount(u64),
    /// Best overall score at or above the threshold.
    HighestScore(f64),
    /// Current streak at or above the threshold.
    Streak(u32),
    /// Completed daily tasks at or above the threshold.
    CompletedTasks(u64),
}

impl BadgeCondition {
    pub fn is_met(&self, stats: &UserStats) -> bool {
        match *self {
            Self::ScanCount(min) => stats.scan_count >= min,
            Self::HighestScore(min) => stats.highest_score >= min,
            Self::Streak(min) => stats.streak.current_streak >= min,
            Self::CompletedTasks(min) => stats.completed_tasks_count >= min,
        }
    }
}

impl std::fmt::Display for BadgeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScanCount(min) => write!(f, "{min} completed analyses"),
            Self::HighestScore(min) => write!(f, "overall score of {min} or more"),
            Self::Streak(min) => write!(f, "{min}-day streak"),
            Self::CompletedTasks(min) => write!(f, "{min} completed tasks"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon_key: &'static str,
    pub condition: BadgeCondition,
}

impl BadgeDefinition {
    pub fn glyph(&self) -> &'static str {
        icon_glyph(self.icon_key)
    }
}

pub static BADGE_CATALOG: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: "first_scan",
        name: "First Scan",
        description: "Completed your first website analysis",
        icon_key: "search",
        condition: BadgeCondition::ScanCount(1),
    },
    BadgeDefinition {
        id: "scan_5",
        name: "Regular Inspector",
        description: "Completed five website analyses",
        icon_key: "chart",
        condition: BadgeCondition::ScanCount(5),
    },
    BadgeDefinition {
        id: "high_score",
        name: "High Achiever",
        description: "Reached an overall score of 80 or more",
        icon_key: "trophy",
        condition: BadgeCondition::HighestScore(80.0),
    },
    BadgeDefinition {
        id: "streak_3",
        name: "On a Roll",
        description: "Stayed active three days in a row",
        icon_key: "flame",
        condition: BadgeCondition::Streak(3),
    },
    BadgeDefinition {
        id: "streak_7",
        name: "Week Warrior",
        description: "Stayed active seven days in a row",
        icon_key: "calendar",
        condition: BadgeCondition::Streak(7),
    },
    BadgeDefinition {
        id: "streak_30",
        name: "Unstoppable",
        description: "Stayed active thirty days in a row",
        icon_key: "crown",
        condition: BadgeCondition::Streak(30),
    },
    BadgeDefinition {
        id: "task_starter",
        name: "Task Starter",
        description: "Completed your first daily task",
        icon_key: "check",
        condition: BadgeCondition::CompletedTasks(1),
    },
    BadgeDefinition {
        id: "task_master",
        name: "Task Master",
        description: "Completed ten daily tasks",
        icon_key: "star",
        condition: BadgeCondition::CompletedTasks(10),
    },
];

const ICON_GLYPHS: &[(&str, &str)] = &[
    ("search", "🔍"),
    ("chart", "📊"),
    ("trophy", "🏆"),
    ("flame", "🔥"),
    ("calendar", "📅"),
    ("crown", "👑"),
    ("check", "✅"),
    ("star", "⭐"),
];

const DEFAULT_GLYPH: &str = "🏅";

/// Display glyph for an icon key; unknown keys get a generic medal.
pub fn icon_glyph(icon_key: &str) -> &'static str {
    ICON_GLYPHS
        .iter()
        .find(|(key, _)| *key == icon_key)
        .map_or(DEFAULT_GLYPH, |(_, glyph)| glyph)
}

pub fn find_badge(id: &str) -> Option<&'static BadgeDefinition> {
    BADGE_CATALOG.iter().find(|b| b.id == id)
}

/// A badge a user has earned. Unique per (user, badge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedBadge {
    pub user_id: Uuid,
    pub badge_id: String,
    pub unlocked_at: DateTime<Utc>,
}

/// User-facing announcement of a freshly unlocked badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeNotification {
    pub user_id: Uuid,
    pub badge_id: String,
    pub title: String,
    pub description: String,
    pub glyph: String,
}

impl BadgeNotification {
    pub fn for_badge(user_id: Uuid, badge: &BadgeDefinition) -> Self {
        Self {
            user_id,
            badge_id: badge.id.to_string(),
            title: badge.name.to_string(),
            description: badge.description.to_string(),
            glyph: badge.glyph().to_string(),
        }
    }
}
