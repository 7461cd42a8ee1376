//! Daily task repository port.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::DailyTask;

#[async_trait]
pub trait DailyTaskRepository: Send + Sync {
    /// Whether a batch was already created for the user on `day`.
    async fn has_batch_for_day(&self, user_id: Uuid, day: NaiveDate) -> DomainResult<bool>;

    /// Atomically claim the (user, day) batch and insert its tasks.
    ///
    /// Returns `None` without writing anything if the batch already exists.
    async fn create_batch_if_absent(
        &self,
        user_id: Uuid,
        day: NaiveDate,
        tasks: &[DailyTask],
    ) -> DomainResult<Option<Vec<DailyTask>>>;

    /// Tasks created for the user on `day`, in insertion order.
    async fn list_for_day(&self, user_id: Uuid, day: NaiveDate) -> DomainResult<Vec<DailyTask>>;

    /// Get a task owned by the user.
    async fn get(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<Option<DailyTask>>;

    /// Set or clear the completion flag of a user's task.
    async fn set_completed(&self, user_id: Uuid, task_id: Uuid, completed: bool)
        -> DomainResult<DailyTask>;

    /// Number of tasks the user has completed, across all days.
    async fn count_completed(&self, user_id: Uuid) -> DomainResult<u64>;
}
