//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces the engagement services depend on:
//! - WebsiteProfileRepository: completed analyses and their scores
//! - StreakRepository: per-user activity streaks
//! - DailyTaskRepository: daily improvement task batches
//! - BadgeRepository: badge unlock records
//! - Notifier: user-facing badge announcements
//! - Clock: the current date

pub mod badge_repository;
pub mod clock;
pub mod daily_task_repository;
pub mod notifier;
pub mod streak_repository;
pub mod website_profile_repository;

pub use badge_repository::BadgeRepository;
pub use clock::{Clock, FixedClock, SystemClock};
pub use daily_task_repository::DailyTaskRepository;
pub use notifier::Notifier;
pub use streak_repository::StreakRepository;
pub use website_profile_repository::WebsiteProfileRepository;
