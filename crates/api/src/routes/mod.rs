pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                       list, create
/// /tasks/{id}                  get, update, delete
/// /tasks/completed             completed tasks
/// /tasks/incomplete            incomplete tasks
/// /tasks/due-before            tasks due before a date (?date=YYYY-MM-DD)
/// /tasks/search                title substring search (?title=string)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tasks", task::router())
}
