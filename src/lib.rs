//! SiteGenome - engagement layer for website analyses
//!
//! After a user's website analysis completes, SiteGenome advances their daily
//! activity streak, proposes up to two improvement tasks for the weakest
//! scoring categories, and unlocks achievement badges.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, ports (traits) and errors
//! - **Service Layer** (`services`): Task generation, badge evaluation and the
//!   post-analysis trigger pipeline
//! - **Adapters** (`adapters`): SQLite repositories and notifiers
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use sitegenome::services::TaskGenerator;
//! use sitegenome::domain::models::CategoryScoreSet;
//!
//! let scores = CategoryScoreSet::new()
//!     .with_score("findability", 30.0)
//!     .with_score("trust", 90.0);
//! let today = chrono::Utc::now().date_naive();
//! let tasks = TaskGenerator::default().generate(Some(&scores), today);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    BadgeDefinition, Category, CategoryScoreSet, Config, DailyTask, StreakRecord, TaskSuggestion,
    UserStats, WebsiteProfile, BADGE_CATALOG,
};
pub use domain::ports::{
    BadgeRepository, Clock, DailyTaskRepository, Notifier, StreakRepository,
    WebsiteProfileRepository,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{BadgeEvaluator, GamificationTrigger, TaskGenerator, TriggerReport};
