pub mod buddies;
pub mod dashboard;
pub mod health;
pub mod mentors;
pub mod tasks;
pub mod topics;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                   list, create
/// /users/by-email/{email}                  lookup by email
/// /users/{id}                              get, update, delete
///
/// /mentors                                 list, create
/// /mentors/{id}                            get, update, delete
///
/// /buddies                                 list, create
/// /buddies/available                       unassigned active buddies
/// /buddies/{id}                            get, update, delete
/// /buddies/{id}/assign                     assign mentor (POST)
/// /buddies/{id}/progress                   topic checklist + percentage (GET)
/// /buddies/{id}/progress/{topic_id}        toggle topic progress (PUT)
///
/// /topics                                  list, create
/// /topics/{id}                             get, update, delete
///
/// /tasks                                   list, create
/// /tasks/{id}                              get, update, delete
/// /tasks/{id}/submissions                  list, create
/// /submissions/{id}/feedback               set mentor feedback (PUT)
///
/// /dashboard/stats                         aggregate counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/mentors", mentors::router())
        .nest("/buddies", buddies::router())
        .nest("/topics", topics::router())
        .nest("/tasks", tasks::router())
        .nest("/submissions", tasks::submissions_router())
        .nest("/dashboard", dashboard::router())
}
