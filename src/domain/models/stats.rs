//! Aggregated user statistics used for badge evaluation.

use serde::{Deserialize, Serialize};

use super::streak::StreakRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    /// Completed analyses across all of the user's profiles.
    pub scan_count: u64,
    /// Best overall score seen, 0 when nothing has been scored.
    pub highest_score: f64,
    pub streak: StreakRecord,
    pub completed_tasks_count: u64,
}
