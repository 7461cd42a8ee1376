pub mod badge;
pub mod category;
pub mod config;
pub mod daily_task;
pub mod stats;
pub mod streak;
pub mod website_profile;

pub use badge::{
    find_badge, icon_glyph, BadgeCondition, BadgeDefinition, BadgeNotification, UnlockedBadge,
    BADGE_CATALOG,
};
pub use category::{Category, CategoryScoreSet};
pub use config::{Config, DatabaseConfig, GamificationConfig, LoggingConfig};
pub use daily_task::{DailyTask, TaskSuggestion};
pub use stats::UserStats;
pub use streak::StreakRecord;
pub use website_profile::{ProfileStatus, WebsiteProfile};
