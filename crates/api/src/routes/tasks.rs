//! Route definitions for the `/tasks` resource and its submissions.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/submissions    -> list_submissions
/// POST   /{id}/submissions    -> create_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list).post(tasks::create))
        .route(
            "/{id}",
            get(tasks::get_by_id)
                .put(tasks::update)
                .delete(tasks::delete),
        )
        .route(
            "/{id}/submissions",
            get(tasks::list_submissions).post(tasks::create_submission),
        )
}

/// Routes mounted at `/submissions`.
///
/// ```text
/// PUT    /{id}/feedback    -> set_feedback
/// ```
pub fn submissions_router() -> Router<AppState> {
    Router::new().route("/{id}/feedback", put(tasks::set_feedback))
}
