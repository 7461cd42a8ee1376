//! User-facing daily task operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::DailyTask;
use crate::domain::ports::{Clock, DailyTaskRepository, SystemClock};

pub struct TaskService {
    repository: Arc<dyn DailyTaskRepository>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn DailyTaskRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Today's batch for the user, empty if none was generated.
    pub async fn today_tasks(&self, user_id: Uuid) -> DomainResult<Vec<DailyTask>> {
        self.repository.list_for_day(user_id, self.clock.today()).await
    }

    pub async fn complete_task(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<DailyTask> {
        let task = self.repository.set_completed(user_id, task_id, true).await?;
        info!(%user_id, %task_id, category = %task.category, "daily task completed");
        Ok(task)
    }

    pub async fn reopen_task(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<DailyTask> {
        self.repository.set_completed(user_id, task_id, false).await
    }
}
