//! Badge condition evaluation.
//!
//! Pure function over the catalog, the user's statistics and the set of
//! badges already held. Persistence is the caller's job.

use std::collections::HashSet;

use crate::domain::models::{BadgeDefinition, UserStats, BADGE_CATALOG};

#[derive(Debug, Clone, Copy)]
pub struct BadgeEvaluator {
    catalog: &'static [BadgeDefinition],
}

impl Default for BadgeEvaluator {
    fn default() -> Self {
        Self::new(BADGE_CATALOG)
    }
}

impl BadgeEvaluator {
    pub fn new(catalog: &'static [BadgeDefinition]) -> Self {
        Self { catalog }
    }

    /// Badges whose condition holds and which are not in `already_unlocked`,
    /// in catalog order.
    pub fn newly_earned(
        &self,
        stats: &UserStats,
        already_unlocked: &HashSet<String>,
    ) -> Vec<&'static BadgeDefinition> {
        self.catalog
            .iter()
            .filter(|badge| !already_unlocked.contains(badge.id))
            .filter(|badge| badge.condition.is_met(stats))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::StreakRecord;

    fn ids(badges: &[&BadgeDefinition]) -> Vec<&'static str> {
        badges.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_first_scan_only() {
        let stats = UserStats {
            scan_count: 1,
            ..Default::default()
        };
        let earned = BadgeEvaluator::default().newly_earned(&stats, &HashSet::new());
        assert_eq!(ids(&earned), vec!["first_scan"]);
    }

    #[test]
    fn test_nothing_for_fresh_user() {
        let earned = BadgeEvaluator::default().newly_earned(&UserStats::default(), &HashSet::new());
        assert!(earned.is_empty());
    }

    #[test]
    fn test_already_unlocked_is_never_returned() {
        let stats = UserStats {
            scan_count: 6,
            ..Default::default()
        };
        let unlocked: HashSet<String> = ["first_scan".to_string()].into_iter().collect();
        let earned = BadgeEvaluator::default().newly_earned(&stats, &unlocked);
        assert_eq!(ids(&earned), vec!["scan_5"]);
    }

    #[test]
    fn test_all_thresholds_met() {
        let stats = UserStats {
            scan_count: 12,
            highest_score: 93.5,
            streak: StreakRecord {
                current_streak: 31,
                longest_streak: 31,
                last_active_date: None,
                total_active_days: 40,
            },
            completed_tasks_count: 25,
        };
        let earned = BadgeEvaluator::default().newly_earned(&stats, &HashSet::new());
        assert_eq!(earned.len(), BADGE_CATALOG.len());
    }

    #[test]
    fn test_streak_uses_current_not_longest() {
        let stats = UserStats {
            streak: StreakRecord {
                current_streak: 1,
                longest_streak: 10,
                last_active_date: None,
                total_active_days: 12,
            },
            ..Default::default()
        };
        let earned = BadgeEvaluator::default().newly_earned(&stats, &HashSet::new());
        assert!(earned.is_empty());
    }

    #[test]
    fn test_high_score_threshold() {
        let below = UserStats {
            highest_score: 79.9,
            ..Default::default()
        };
        let at = UserStats {
            highest_score: 80.0,
            ..Default::default()
        };
        let evaluator = BadgeEvaluator::default();
        assert!(evaluator.newly_earned(&below, &HashSet::new()).is_empty());
        assert_eq!(ids(&evaluator.newly_earned(&at, &HashSet::new())), vec!["high_score"]);
    }
}
