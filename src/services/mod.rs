//! Service layer: engagement logic coordinating the domain ports.

pub mod achievement_service;
pub mod analysis_service;
pub mod badge_evaluator;
pub mod gamification_trigger;
pub mod task_generator;
pub mod task_service;

pub use achievement_service::{AchievementService, BadgeStatus, StreakSummary};
pub use analysis_service::AnalysisService;
pub use badge_evaluator::BadgeEvaluator;
pub use gamification_trigger::{GamificationTrigger, StepOutcome, TriggerReport};
pub use task_generator::TaskGenerator;
pub use task_service::TaskService;
