//! Activity streak domain model.
//!
//! A streak counts consecutive calendar days on which the user completed at
//! least one analysis. Advancing is keyed by date so repeated activity on the
//! same day never double counts.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub total_active_days: u32,
}

impl StreakRecord {
    /// Apply activity on `today` and return the resulting record.
    ///
    /// Same-day activity is a no-op. Activity the day after the last active
    /// day extends the streak; anything else starts a new streak of one.
    pub fn advance(&self, today: NaiveDate) -> Self {
        match self.last_active_date {
            Some(last) if last == today => *self,
            last => {
                let continues = last
                    .and_then(|d| d.checked_add_days(Days::new(1)))
                    .is_some_and(|next| next == today);

                let current = if continues {
                    self.current_streak.saturating_add(1)
                } else {
                    1
                };

                Self {
                    current_streak: current,
                    longest_streak: self.longest_streak.max(current),
                    last_active_date: Some(today),
                    total_active_days: self.total_active_days.saturating_add(1),
                }
            }
        }
    }

    /// Enforce `longest >= current` on records read from storage.
    pub fn normalized(mut self) -> Self {
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self
    }

    pub fn is_active_today(&self, today: NaiveDate) -> bool {
        self.last_active_date == Some(today)
    }

    /// The streak survives only if the user is active again today.
    pub fn is_at_risk(&self, today: NaiveDate) -> bool {
        self.current_streak > 0
            && self
                .last_active_date
                .and_then(|d| d.checked_add_days(Days::new(1)))
                .is_some_and(|next| next == today)
    }

    /// Streak length as seen on `today`: zero once a day has been missed.
    pub fn effective_streak(&self, today: NaiveDate) -> u32 {
        if self.is_active_today(today) || self.is_at_risk(today) {
            self.current_streak
        } else {
            0
        }
    }
}
