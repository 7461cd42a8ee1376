//! Gamification trigger.
//!
//! Runs once per batch of completed analyses for a user and drives the
//! engagement pipeline:
//!
//! 1. streak update
//! 2. daily task generation (at most one batch per user and day)
//! 3. statistics gathering
//! 4. badge evaluation, unlock and notification
//!
//! Every step produces a [`StepOutcome`]. A failing step is logged and
//! recorded in the [`TriggerReport`]; later steps still run. The trigger
//! never returns an error to its caller.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    BadgeNotification, DailyTask, GamificationConfig, StreakRecord, UserStats, WebsiteProfile,
};
use crate::domain::ports::{
    BadgeRepository, Clock, DailyTaskRepository, Notifier, StreakRepository, SystemClock,
    WebsiteProfileRepository,
};
use crate::services::badge_evaluator::BadgeEvaluator;
use crate::services::task_generator::TaskGenerator;

/// Result of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "detail")]
pub enum StepOutcome {
    Succeeded,
    Skipped(String),
    Failed(String),
}

impl StepOutcome {
    fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// What one trigger run did.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerReport {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub streak_step: StepOutcome,
    pub tasks_step: StepOutcome,
    pub stats_step: StepOutcome,
    pub badges_step: StepOutcome,
    /// Streak shown to the user: the updated record, or the last known one.
    pub streak: StreakRecord,
    pub tasks_created: Vec<DailyTask>,
    pub stats: Option<UserStats>,
    pub badges_unlocked: Vec<BadgeNotification>,
}

impl TriggerReport {
    fn new(user_id: Uuid, date: NaiveDate) -> Self {
        let pending = StepOutcome::skipped("not run");
        Self {
            user_id,
            date,
            streak_step: pending.clone(),
            tasks_step: pending.clone(),
            stats_step: pending.clone(),
            badges_step: pending,
            streak: StreakRecord::default(),
            tasks_created: Vec::new(),
            stats: None,
            badges_unlocked: Vec::new(),
        }
    }

    pub fn has_failures(&self) -> bool {
        [&self.streak_step, &self.tasks_step, &self.stats_step, &self.badges_step]
            .iter()
            .any(|s| s.is_failed())
    }
}

pub struct GamificationTrigger {
    profiles: Arc<dyn WebsiteProfileRepository>,
    streaks: Arc<dyn StreakRepository>,
    tasks: Arc<dyn DailyTaskRepository>,
    badges: Arc<dyn BadgeRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    generator: TaskGenerator,
    evaluator: BadgeEvaluator,
    config: GamificationConfig,
}

impl GamificationTrigger {
    pub fn new(
        profiles: Arc<dyn WebsiteProfileRepository>,
        streaks: Arc<dyn StreakRepository>,
        tasks: Arc<dyn DailyTaskRepository>,
        badges: Arc<dyn BadgeRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let config = GamificationConfig::default();
        Self {
            profiles,
            streaks,
            tasks,
            badges,
            notifier,
            clock: Arc::new(SystemClock),
            generator: TaskGenerator::new(config.max_daily_tasks),
            evaluator: BadgeEvaluator::default(),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: GamificationConfig) -> Self {
        self.generator = TaskGenerator::new(config.max_daily_tasks);
        self.config = config;
        self
    }

    /// Run the pipeline for `completed_profiles` belonging to `user_id`.
    #[instrument(skip_all, fields(user_id = %user_id, profiles = completed_profiles.len()))]
    pub async fn run(&self, user_id: Uuid, completed_profiles: &[WebsiteProfile]) -> TriggerReport {
        let today = self.clock.today();
        let mut report = TriggerReport::new(user_id, today);

        let completed: Vec<&WebsiteProfile> = completed_profiles
            .iter()
            .filter(|p| p.user_id == user_id && p.is_completed())
            .collect();

        if completed.is_empty() {
            debug!("no completed analyses for user, nothing to do");
            let reason = StepOutcome::skipped("no completed analyses");
            report.streak_step = reason.clone();
            report.tasks_step = reason.clone();
            report.stats_step = reason.clone();
            report.badges_step = reason;
            return report;
        }

        // 1. Streak
        if self.config.streaks_enabled {
            match self.streaks.record_activity(user_id, today).await {
                Ok(record) => {
                    report.streak = record;
                    report.streak_step = StepOutcome::Succeeded;
                }
                Err(e) => {
                    warn!(error = %e, "streak update failed, falling back to last known streak");
                    report.streak = self.last_known_streak(user_id).await;
                    report.streak_step = StepOutcome::Failed(e.to_string());
                }
            }
        } else {
            report.streak = self.last_known_streak(user_id).await;
            report.streak_step = StepOutcome::skipped("streaks disabled");
        }

        // 2. Daily tasks
        report.tasks_step = if self.config.tasks_enabled {
            match self.generate_daily_tasks(user_id, today, &completed).await {
                Ok(TaskStep::Created(tasks)) => {
                    info!(count = tasks.len(), "created daily tasks");
                    report.tasks_created = tasks;
                    StepOutcome::Succeeded
                }
                Ok(TaskStep::Skipped(reason)) => {
                    debug!(reason, "daily task generation skipped");
                    StepOutcome::skipped(reason)
                }
                Err(e) => {
                    warn!(error = %e, "daily task generation failed");
                    StepOutcome::Failed(e.to_string())
                }
            }
        } else {
            StepOutcome::skipped("tasks disabled")
        };

        // 3. Statistics
        let stats = match self.gather_stats(user_id, report.streak).await {
            Ok(stats) => {
                report.stats_step = StepOutcome::Succeeded;
                report.stats = Some(stats);
                Some(stats)
            }
            Err(e) => {
                warn!(error = %e, "gathering user statistics failed");
                report.stats_step = StepOutcome::Failed(e.to_string());
                None
            }
        };

        // 4. Badges
        report.badges_step = match (self.config.badges_enabled, stats) {
            (false, _) => StepOutcome::skipped("badges disabled"),
            (true, None) => StepOutcome::skipped("statistics unavailable"),
            (true, Some(stats)) => {
                let (unlocked, outcome) = self.award_badges(user_id, &stats).await;
                report.badges_unlocked = unlocked;
                outcome
            }
        };

        if report.has_failures() {
            warn!("gamification trigger finished with failures");
        } else {
            info!(
                streak = report.streak.current_streak,
                tasks = report.tasks_created.len(),
                badges = report.badges_unlocked.len(),
                "gamification trigger finished"
            );
        }

        report
    }

    async fn last_known_streak(&self, user_id: Uuid) -> StreakRecord {
        match self.streaks.get(user_id).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "reading last known streak failed, showing zero");
                StreakRecord::default()
            }
        }
    }

    async fn generate_daily_tasks(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        completed: &[&WebsiteProfile],
    ) -> DomainResult<TaskStep> {
        let Some(primary) = completed
            .iter()
            .find(|p| p.is_primary && !p.category_scores.is_empty())
        else {
            return Ok(TaskStep::Skipped("no primary profile with category scores"));
        };

        if self.tasks.has_batch_for_day(user_id, today).await? {
            return Ok(TaskStep::Skipped("tasks already generated today"));
        }

        let suggestions = self.generator.generate(Some(&primary.category_scores), today);
        if suggestions.is_empty() {
            return Ok(TaskStep::Skipped("no suggestions for these categories"));
        }

        let tasks: Vec<DailyTask> = suggestions
            .into_iter()
            .map(|s| DailyTask::from_suggestion(user_id, Some(primary.id), today, s))
            .collect();

        Ok(match self.tasks.create_batch_if_absent(user_id, today, &tasks).await? {
            Some(created) => TaskStep::Created(created),
            None => TaskStep::Skipped("tasks already generated today"),
        })
    }

    async fn gather_stats(&self, user_id: Uuid, fallback_streak: StreakRecord) -> DomainResult<UserStats> {
        let (scan_count, highest_score, completed_tasks, streak) = futures::join!(
            self.profiles.count_completed(user_id),
            self.profiles.highest_score(user_id),
            self.tasks.count_completed(user_id),
            self.streaks.get(user_id),
        );

        let streak = streak.unwrap_or_else(|e| {
            warn!(error = %e, "streak snapshot unavailable, using value from this run");
            fallback_streak
        });

        Ok(UserStats {
            scan_count: scan_count?,
            highest_score: highest_score?.unwrap_or(0.0),
            streak,
            completed_tasks_count: completed_tasks?,
        })
    }

    async fn award_badges(
        &self,
        user_id: Uuid,
        stats: &UserStats,
    ) -> (Vec<BadgeNotification>, StepOutcome) {
        let already: HashSet<String> = match self.badges.unlocked_ids(user_id).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "reading unlocked badges failed");
                return (Vec::new(), StepOutcome::Failed(e.to_string()));
            }
        };

        let candidates = self.evaluator.newly_earned(stats, &already);
        let now = self.clock.now();
        let mut unlocked = Vec::new();
        let mut failures = Vec::new();

        for badge in candidates {
            match self.badges.unlock(user_id, badge.id, now).await {
                Ok(true) => {
                    let notification = BadgeNotification::for_badge(user_id, badge);
                    if let Err(e) = self.notifier.notify(&notification).await {
                        warn!(badge_id = badge.id, error = %e, "badge notification failed");
                    }
                    unlocked.push(notification);
                }
                Ok(false) => {
                    debug!(badge_id = badge.id, "badge already unlocked by a concurrent run");
                }
                Err(e) => {
                    warn!(badge_id = badge.id, error = %e, "badge unlock failed");
                    failures.push(format!("{}: {e}", badge.id));
                }
            }
        }

        let outcome = if failures.is_empty() {
            StepOutcome::Succeeded
        } else {
            StepOutcome::Failed(failures.join("; "))
        };
        (unlocked, outcome)
    }
}

enum TaskStep {
    Created(Vec<DailyTask>),
    Skipped(&'static str),
}
