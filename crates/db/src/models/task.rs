//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
///
/// Serialized with camelCase keys per the wire contract: dates are
/// `YYYY-MM-DD`, timestamps ISO-8601.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request payload for creating or updating a task.
///
/// The same shape serves both operations: an update overwrites title,
/// description, and due date wholesale, so omitted optional fields become
/// NULL. `completed` is deliberately absent -- the update operation never
/// touches the completion flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// Defaults to empty when omitted so the validator can report the
    /// missing title as a field error instead of a deserialization failure.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Query parameters for `GET /api/tasks/due-before`.
#[derive(Debug, Clone, Deserialize)]
pub struct DueBeforeParams {
    /// Exclusive upper bound (`YYYY-MM-DD`).
    pub date: NaiveDate,
}

/// Query parameters for `GET /api/tasks/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleSearchParams {
    /// Substring to match against titles, case-insensitive.
    pub title: String,
}
