//! End-to-end runs of the post-analysis engagement pipeline against SQLite.

mod common;

use common::{day, weak_findability_scores, Harness};
use sitegenome::domain::models::{CategoryScoreSet, GamificationConfig, WebsiteProfile};
use sitegenome::domain::ports::{
    BadgeRepository, DailyTaskRepository, StreakRepository, WebsiteProfileRepository,
};
use sitegenome::services::StepOutcome;
use tokio_test::assert_ok;
use uuid::Uuid;

#[tokio::test]
async fn test_first_analysis_starts_streak_creates_tasks_and_unlocks_first_scan() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let today = day(2026, 10, 19);
    let profile = h.completed_primary(user, 60.0, weak_findability_scores()).await;

    let report = h.trigger_on(today).run(user, &[profile.clone()]).await;

    assert!(!report.has_failures());
    assert_eq!(report.streak.current_streak, 1);
    assert_eq!(report.streak.longest_streak, 1);

    let categories: Vec<&str> = report.tasks_created.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(categories, vec!["findability", "offerClarity"]);
    // 2026 + 10 + 19 = 2055; 2055 % 3 == 0 and 2056 % 3 == 1
    assert!(report.tasks_created[0].text.starts_with("Write a unique meta description"));
    assert!(report.tasks_created[1].text.starts_with("List your three core services"));
    assert!(report.tasks_created.iter().all(|t| t.website_profile_id == Some(profile.id)));

    let ids: Vec<&str> = report.badges_unlocked.iter().map(|b| b.badge_id.as_str()).collect();
    assert_eq!(ids, vec!["first_scan"]);
    assert_eq!(h.notifier.received().await.len(), 1);

    let stored = assert_ok!(h.tasks.list_for_day(user, today).await);
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_rerun_same_day_is_idempotent() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let today = day(2026, 10, 19);
    let profile = h.completed_primary(user, 60.0, weak_findability_scores()).await;
    let trigger = h.trigger_on(today);

    trigger.run(user, &[profile.clone()]).await;
    h.notifier.drain().await;
    let second = trigger.run(user, &[profile]).await;

    assert_eq!(second.streak.current_streak, 1);
    assert_eq!(
        second.tasks_step,
        StepOutcome::Skipped("tasks already generated today".to_string())
    );
    assert!(second.tasks_created.is_empty());
    assert!(second.badges_unlocked.is_empty());
    assert!(h.notifier.received().await.is_empty());

    assert_eq!(h.tasks.list_for_day(user, today).await.unwrap().len(), 2);
    assert_eq!(h.badges.list_unlocked(user).await.unwrap().len(), 1);

    let streak = h.streaks.get(user).await.unwrap();
    assert_eq!(streak.total_active_days, 1);
}

#[tokio::test]
async fn test_consecutive_days_unlock_streak_badge_and_gap_resets() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let profile = h.completed_primary(user, 60.0, weak_findability_scores()).await;

    for d in 17..=19 {
        h.trigger_on(day(2026, 10, d)).run(user, &[profile.clone()]).await;
    }

    let unlocked = h.badges.unlocked_ids(user).await.unwrap();
    assert!(unlocked.contains("streak_3"));
    assert!(!unlocked.contains("streak_7"));

    let after_gap = h.trigger_on(day(2026, 10, 22)).run(user, &[profile]).await;
    assert_eq!(after_gap.streak.current_streak, 1);
    assert_eq!(after_gap.streak.longest_streak, 3);
    assert_eq!(after_gap.streak.total_active_days, 4);
}

#[tokio::test]
async fn test_competitor_only_skips_tasks_but_counts_activity() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let competitor = WebsiteProfile::new(user, "https://rival.example")
        .competitor()
        .completed(Some(55.0), weak_findability_scores());
    h.profiles.create(&competitor).await.unwrap();

    let report = h.trigger_on(day(2026, 10, 19)).run(user, &[competitor]).await;

    assert_eq!(report.streak_step, StepOutcome::Succeeded);
    assert_eq!(report.streak.current_streak, 1);
    assert!(matches!(report.tasks_step, StepOutcome::Skipped(_)));
    assert!(report.tasks_created.is_empty());
}

#[tokio::test]
async fn test_no_completed_analyses_touches_nothing() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let pending = WebsiteProfile::new(user, "https://example.com");

    let report = h.trigger_on(day(2026, 10, 19)).run(user, &[pending]).await;

    assert!(!report.has_failures());
    assert!(matches!(report.streak_step, StepOutcome::Skipped(_)));
    assert!(matches!(report.badges_step, StepOutcome::Skipped(_)));
    assert_eq!(h.streaks.get(user).await.unwrap().current_streak, 0);
    assert!(h.badges.unlocked_ids(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_triggers_unlock_each_badge_once() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let today = day(2026, 10, 19);
    let profile = h.completed_primary(user, 92.0, weak_findability_scores()).await;

    let first = h.trigger_on(today);
    let second = h.trigger_on(today);
    let profiles = [profile];
    let (a, b) = tokio::join!(first.run(user, &profiles), second.run(user, &profiles));

    let mut announced: Vec<String> = a
        .badges_unlocked
        .iter()
        .chain(&b.badges_unlocked)
        .map(|n| n.badge_id.clone())
        .collect();
    announced.sort();
    assert_eq!(announced, vec!["first_scan".to_string(), "high_score".to_string()]);

    assert_eq!(h.notifier.received().await.len(), 2);
    assert_eq!(h.badges.list_unlocked(user).await.unwrap().len(), 2);
    assert_eq!(h.tasks.list_for_day(user, today).await.unwrap().len(), 2);
    assert_eq!(h.streaks.get(user).await.unwrap().current_streak, 1);
}

#[tokio::test]
async fn test_completed_task_unlocks_task_starter_on_next_run() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let profile = h.completed_primary(user, 60.0, weak_findability_scores()).await;

    let report = h.trigger_on(day(2026, 10, 19)).run(user, &[profile.clone()]).await;
    let task_id = report.tasks_created[0].id;
    h.tasks.set_completed(user, task_id, true).await.unwrap();

    let next = h.trigger_on(day(2026, 10, 20)).run(user, &[profile]).await;
    let ids: Vec<&str> = next.badges_unlocked.iter().map(|b| b.badge_id.as_str()).collect();
    assert_eq!(ids, vec!["task_starter"]);
    assert_eq!(next.stats.unwrap().completed_tasks_count, 1);
}

#[tokio::test]
async fn test_disabled_features_are_reported_as_skipped() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let profile = h.completed_primary(user, 60.0, weak_findability_scores()).await;
    let config = GamificationConfig {
        streaks_enabled: false,
        tasks_enabled: false,
        badges_enabled: false,
        ..GamificationConfig::default()
    };

    let report = h.trigger_with(day(2026, 10, 19), config).run(user, &[profile]).await;

    assert_eq!(report.streak_step, StepOutcome::Skipped("streaks disabled".to_string()));
    assert_eq!(report.tasks_step, StepOutcome::Skipped("tasks disabled".to_string()));
    assert_eq!(report.badges_step, StepOutcome::Skipped("badges disabled".to_string()));
    assert_eq!(report.stats_step, StepOutcome::Succeeded);
    assert!(h.badges.unlocked_ids(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_task_limit_follows_config() {
    let h = Harness::new().await;
    let user = Uuid::new_v4();
    let scores = CategoryScoreSet::new()
        .with_score("mobileUsability", 10.0)
        .with_score("trustProof", 20.0)
        .with_score("findability", 30.0);
    let profile = h.completed_primary(user, 40.0, scores).await;
    let config = GamificationConfig {
        max_daily_tasks: 3,
        ..GamificationConfig::default()
    };

    let report = h.trigger_with(day(2026, 10, 19), config).run(user, &[profile]).await;

    let categories: Vec<&str> = report.tasks_created.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(categories, vec!["mobileUsability", "trustProof", "findability"]);
}
