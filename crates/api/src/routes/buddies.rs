//! Route definitions for the `/buddies` resource, including assignment
//! and per-topic progress.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::buddies;
use crate::state::AppState;

/// Routes mounted at `/buddies`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /available                 -> list_available
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/assign               -> assign
/// GET    /{id}/progress             -> get_progress
/// PUT    /{id}/progress/{topic_id}  -> put_progress
/// ```
///
/// `/available` is registered before `/{id}` so the literal segment is
/// not captured as an id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(buddies::list).post(buddies::create))
        .route("/available", get(buddies::list_available))
        .route(
            "/{id}",
            get(buddies::get_by_id)
                .put(buddies::update)
                .delete(buddies::delete),
        )
        .route("/{id}/assign", post(buddies::assign))
        .route("/{id}/progress", get(buddies::get_progress))
        .route("/{id}/progress/{topic_id}", put(buddies::put_progress))
}
