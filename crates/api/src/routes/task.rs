//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// The static segments (`/completed`, `/incomplete`, `/due-before`,
/// `/search`) take precedence over the `/{id}` capture.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /completed    -> list_completed
/// GET    /incomplete   -> list_incomplete
/// GET    /due-before   -> list_due_before
/// GET    /search       -> search
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/completed", get(task::list_completed))
        .route("/incomplete", get(task::list_incomplete))
        .route("/due-before", get(task::list_due_before))
        .route("/search", get(task::search))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
