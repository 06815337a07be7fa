//! Task operations behind the HTTP handlers.
//!
//! Single entry point enforcing presence semantics: lookups that find
//! nothing return `None` (or `false` for delete) rather than an error, and
//! handlers map absence to 404. Input validation happens in the handlers
//! before a request reaches this layer.
//!
//! Every method delegates to [`TaskRepo`], whose single-statement queries
//! make each operation an atomic unit of work: an update or delete either
//! fully applies or leaves the row untouched, and reads take no locks.

use chrono::NaiveDate;
use taskhub_core::types::DbId;
use taskhub_db::models::task::{Task, TaskInput};
use taskhub_db::repositories::TaskRepo;
use taskhub_db::DbPool;

/// Orchestrates task persistence for the API layer.
pub struct TaskService;

impl TaskService {
    /// Create a task from validated input. The store assigns id and
    /// timestamps; the completion flag starts false.
    pub async fn create_task(pool: &DbPool, input: &TaskInput) -> Result<Task, sqlx::Error> {
        let task = TaskRepo::create(pool, input).await?;

        tracing::info!(task_id = task.id, "Task created");

        Ok(task)
    }

    /// Look up a task by ID. Absence is a value, not an error.
    pub async fn get_task_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        TaskRepo::find_by_id(pool, id).await
    }

    /// List every task.
    pub async fn get_all_tasks(pool: &DbPool) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::list_all(pool).await
    }

    /// Overwrite a task's title, description, and due date. The completion
    /// flag and creation timestamp are preserved.
    ///
    /// Returns `None` if no task with the given ID exists.
    pub async fn update_task(
        pool: &DbPool,
        id: DbId,
        input: &TaskInput,
    ) -> Result<Option<Task>, sqlx::Error> {
        let updated = TaskRepo::update(pool, id, input).await?;

        if updated.is_some() {
            tracing::info!(task_id = id, "Task updated");
        }

        Ok(updated)
    }

    /// Delete a task by ID. Returns `false` (with no side effects) if no
    /// task with the given ID exists.
    pub async fn delete_task(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let deleted = TaskRepo::delete(pool, id).await?;

        if deleted {
            tracing::info!(task_id = id, "Task deleted");
        }

        Ok(deleted)
    }

    /// List completed tasks.
    pub async fn get_completed_tasks(pool: &DbPool) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::find_by_completed(pool, true).await
    }

    /// List incomplete tasks.
    pub async fn get_incomplete_tasks(pool: &DbPool) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::find_by_completed(pool, false).await
    }

    /// List tasks due strictly before the given date.
    pub async fn get_tasks_due_before(
        pool: &DbPool,
        date: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::find_due_before(pool, date).await
    }

    /// Case-insensitive substring search against titles. No match yields an
    /// empty list.
    pub async fn search_tasks_by_title(
        pool: &DbPool,
        title: &str,
    ) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::search_by_title(pool, title).await
    }
}
