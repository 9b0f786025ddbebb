//! Route definitions for the `/mentors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mentors;
use crate::state::AppState;

/// Routes mounted at `/mentors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mentors::list).post(mentors::create))
        .route(
            "/{id}",
            get(mentors::get_by_id)
                .put(mentors::update)
                .delete(mentors::delete),
        )
}
