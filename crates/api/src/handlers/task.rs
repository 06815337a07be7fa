//! Handlers for the `/tasks` resource.
//!
//! Create and update payloads are validated here, before the service is
//! called, so a rejected request never opens a unit of work. Absence from
//! the service maps to 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use taskhub_core::error::CoreError;
use taskhub_core::task::validate_task_fields;
use taskhub_core::types::DbId;
use taskhub_db::models::task::{DueBeforeParams, Task, TaskInput, TitleSearchParams};

use crate::error::{AppError, AppResult};
use crate::service::TaskService;
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TaskInput>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_input(&input)?;
    let task = TaskService::create_task(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::get_all_tasks(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskService::get_task_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TaskInput>,
) -> AppResult<Json<Task>> {
    validate_input(&input)?;
    let task = TaskService::update_task(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskService::delete_task(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

// ---------------------------------------------------------------------------
// Filtered reads
// ---------------------------------------------------------------------------

/// GET /api/tasks/completed
pub async fn list_completed(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::get_completed_tasks(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/incomplete
pub async fn list_incomplete(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::get_incomplete_tasks(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/due-before?date=YYYY-MM-DD
///
/// A missing or malformed `date` is rejected by the query extractor with
/// a 400 before this handler runs.
pub async fn list_due_before(
    State(state): State<AppState>,
    Query(params): Query<DueBeforeParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::get_tasks_due_before(&state.pool, params.date).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/search?title=substring
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::search_tasks_by_title(&state.pool, &params.title).await?;
    Ok(Json(tasks))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a create/update payload against the server's current UTC date.
fn validate_input(input: &TaskInput) -> Result<(), AppError> {
    let today = Utc::now().date_naive();
    validate_task_fields(
        &input.title,
        input.description.as_deref(),
        input.due_date,
        today,
    )
    .map_err(AppError::Validation)
}
