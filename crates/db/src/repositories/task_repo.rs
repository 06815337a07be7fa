//! Repository for the `tasks` table.
//!
//! Provides task CRUD plus the filter surface used by the service layer:
//! completion-flag filters, due-date comparisons, case-insensitive title
//! search, and completion counts. Every method is a single SQL statement,
//! so each call is one atomic unit of work; concurrent writes to the same
//! row serialize on PostgreSQL row locks.

use chrono::NaiveDate;
use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::task::{Task, TaskInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, due_date, completed, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The store assigns `id`, `created_at`, and `updated_at`; `completed`
    /// starts false via the column default.
    pub async fn create(pool: &PgPool, input: &TaskInput) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, due_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks ordered by ID, so the order is stable within a read.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Overwrite a task's title, description, and due date, refreshing
    /// `updated_at`. Omitted optional fields become NULL; `id`,
    /// `completed`, and `created_at` are untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TaskInput,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                due_date = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Filtered reads
    // -----------------------------------------------------------------------

    /// List tasks by completion flag.
    pub async fn find_by_completed(
        pool: &PgPool,
        completed: bool,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE completed = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(completed)
            .fetch_all(pool)
            .await
    }

    /// List tasks due on exactly the given date.
    pub async fn find_by_due_date(
        pool: &PgPool,
        due_date: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE due_date = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(due_date)
            .fetch_all(pool)
            .await
    }

    /// List tasks due strictly before the given date.
    ///
    /// Tasks without a due date never match.
    pub async fn find_due_before(
        pool: &PgPool,
        due_date: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE due_date < $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(due_date)
            .fetch_all(pool)
            .await
    }

    /// List tasks due strictly after the given date.
    pub async fn find_due_after(
        pool: &PgPool,
        due_date: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE due_date > $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(due_date)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search against titles.
    ///
    /// LIKE wildcards in the needle are escaped, so searching for `50%`
    /// matches the literal text rather than everything starting with `50`.
    pub async fn search_by_title(pool: &PgPool, title: &str) -> Result<Vec<Task>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(title));
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE title ILIKE $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// List incomplete tasks due strictly before the given date (the
    /// overdue query).
    pub async fn find_incomplete_due_before(
        pool: &PgPool,
        due_date: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE completed = FALSE AND due_date < $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(due_date)
            .fetch_all(pool)
            .await
    }

    /// Count tasks by completion flag.
    pub async fn count_by_completed(pool: &PgPool, completed: bool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE completed = $1")
            .bind(completed)
            .fetch_one(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Escape LIKE/ILIKE wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("buy milk"), "buy milk");
    }

    #[test]
    fn test_escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_done"), "50\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
