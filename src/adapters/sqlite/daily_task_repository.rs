//! SQLite implementation of the DailyTaskRepository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{
    format_date, parse_date, parse_optional_datetime, parse_optional_uuid, parse_uuid, to_count,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DailyTask;
use crate::domain::ports::DailyTaskRepository;

const TASK_COLUMNS: &str =
    "id, user_id, website_profile_id, text, category, completed, created_date, completed_at";

#[derive(Clone)]
pub struct SqliteDailyTaskRepository {
    pool: SqlitePool,
}

impl SqliteDailyTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyTaskRepository for SqliteDailyTaskRepository {
    async fn has_batch_for_day(&self, user_id: Uuid, day: NaiveDate) -> DomainResult<bool> {
        let (exists,): (i64,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM daily_task_batches WHERE user_id = ? AND batch_date = ?)",
        )
        .bind(user_id.to_string())
        .bind(format_date(day))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    async fn create_batch_if_absent(
        &self,
        user_id: Uuid,
        day: NaiveDate,
        tasks: &[DailyTask],
    ) -> DomainResult<Option<Vec<DailyTask>>> {
        if let Some(stray) = tasks.iter().find(|t| t.user_id != user_id || t.created_date != day) {
            return Err(DomainError::ValidationFailed(format!(
                "Task {} does not belong to batch {user_id}/{day}",
                stray.id
            )));
        }

        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            "INSERT INTO daily_task_batches (user_id, batch_date, created_at) VALUES (?, ?, ?) ON CONFLICT DO NOTHING",
        )
        .bind(user_id.to_string())
        .bind(format_date(day))
        .bind(Utc::now().to_rfc3339())
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        for (position, task) in tasks.iter().enumerate() {
            sqlx::query(
                r"INSERT INTO daily_tasks (id, user_id, website_profile_id, text, category, completed, created_date, completed_at, position)
                  VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(task.id.to_string())
            .bind(task.user_id.to_string())
            .bind(task.website_profile_id.map(|id| id.to_string()))
            .bind(&task.text)
            .bind(&task.category)
            .bind(task.completed)
            .bind(format_date(task.created_date))
            .bind(task.completed_at.map(|t| t.to_rfc3339()))
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(tasks.to_vec()))
    }

    async fn list_for_day(&self, user_id: Uuid, day: NaiveDate) -> DomainResult<Vec<DailyTask>> {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE user_id = ? AND created_date = ? ORDER BY position"
        ))
        .bind(user_id.to_string())
        .bind(format_date(day))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn get(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<Option<DailyTask>> {
        let row: Option<TaskRow> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE id = ? AND user_id = ?"
        ))
        .bind(task_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn set_completed(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        completed: bool,
    ) -> DomainResult<DailyTask> {
        let completed_at = completed.then(|| Utc::now().to_rfc3339());

        let result = sqlx::query(
            "UPDATE daily_tasks SET completed = ?, completed_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(completed)
        .bind(completed_at)
        .bind(task_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TaskNotFound(task_id));
        }

        self.get(user_id, task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(task_id))
    }

    async fn count_completed(&self, user_id: Uuid) -> DomainResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM daily_tasks WHERE user_id = ? AND completed = 1")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        to_count(count)
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    user_id: String,
    website_profile_id: Option<String>,
    text: String,
    category: String,
    completed: bool,
    created_date: String,
    completed_at: Option<String>,
}

impl TryFrom<TaskRow> for DailyTask {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(DailyTask {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            website_profile_id: parse_optional_uuid(row.website_profile_id)?,
            text: row.text,
            category: row.category,
            completed: row.completed,
            created_date: parse_date(&row.created_date)?,
            completed_at: parse_optional_datetime(row.completed_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;
    use crate::domain::models::TaskSuggestion;

    async fn setup_test_repo() -> SqliteDailyTaskRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteDailyTaskRepository::new(pool)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 12).unwrap()
    }

    fn batch(user_id: Uuid, date: NaiveDate) -> Vec<DailyTask> {
        vec![
            DailyTask::from_suggestion(user_id, None, date, TaskSuggestion::new("First", "findability")),
            DailyTask::from_suggestion(user_id, None, date, TaskSuggestion::new("Second", "offerClarity")),
        ]
    }

    #[tokio::test]
    async fn test_create_batch_and_list() {
        let repo = setup_test_repo().await;
        let user = Uuid::new_v4();

        assert!(!repo.has_batch_for_day(user, day()).await.unwrap());
        let created = repo.create_batch_if_absent(user, day(), &batch(user, day())).await.unwrap();
        assert_eq!(created.unwrap().len(), 2);
        assert!(repo.has_batch_for_day(user, day()).await.unwrap());

        let listed = repo.list_for_day(user, day()).await.unwrap();
        let texts: Vec<&str> = listed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_second_batch_same_day_is_rejected() {
        let repo = setup_test_repo().await;
        let user = Uuid::new_v4();

        repo.create_batch_if_absent(user, day(), &batch(user, day())).await.unwrap();
        let again = repo.create_batch_if_absent(user, day(), &batch(user, day())).await.unwrap();

        assert!(again.is_none());
        assert_eq!(repo.list_for_day(user, day()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_batch_rejects_foreign_tasks() {
        let repo = setup_test_repo().await;
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();

        let result = repo.create_batch_if_absent(user, day(), &batch(other, day())).await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
        assert!(!repo.has_batch_for_day(user, day()).await.unwrap());
    }

    #[tokio::test]
    async fn test_complete_and_reopen() {
        let repo = setup_test_repo().await;
        let user = Uuid::new_v4();
        let tasks = batch(user, day());
        repo.create_batch_if_absent(user, day(), &tasks).await.unwrap();

        let done = repo.set_completed(user, tasks[0].id, true).await.unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());
        assert_eq!(repo.count_completed(user).await.unwrap(), 1);

        let reopened = repo.set_completed(user, tasks[0].id, false).await.unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
        assert_eq!(repo.count_completed(user).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cannot_complete_someone_elses_task() {
        let repo = setup_test_repo().await;
        let owner = Uuid::new_v4();
        let tasks = batch(owner, day());
        repo.create_batch_if_absent(owner, day(), &tasks).await.unwrap();

        let result = repo.set_completed(Uuid::new_v4(), tasks[0].id, true).await;
        assert!(matches!(result, Err(DomainError::TaskNotFound(_))));
    }
}
