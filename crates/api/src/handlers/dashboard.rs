//! Handlers for the dashboard aggregates.
//!
//! Pure read-side: every number is recomputed from current state on each
//! call, never persisted.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use mentorhub_core::progress::completion_rate;
use mentorhub_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Mentor partition for the dashboard.
#[derive(Debug, Serialize)]
pub struct MentorBreakdown {
    pub total: i64,
    pub active: i64,
}

/// Buddy partition by status.
#[derive(Debug, Serialize)]
pub struct BuddyBreakdown {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub exited: i64,
}

/// Dashboard stats payload.
///
/// `weekly_tasks` is a rolling seven-day window; `completion_rate` is
/// `round(100 * completed / total)` over all tasks, `0` when none exist.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_mentors: i64,
    pub active_buddies: i64,
    pub weekly_tasks: i64,
    pub completion_rate: i64,
    pub mentors: MentorBreakdown,
    pub buddies: BuddyBreakdown,
}

/// GET /api/v1/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let counts = StatsRepo::dashboard_counts(&state.pool).await?;

    let stats = DashboardStats {
        total_mentors: counts.total_mentors,
        active_buddies: counts.active_buddies,
        weekly_tasks: counts.weekly_tasks,
        completion_rate: completion_rate(counts.completed_tasks, counts.total_tasks),
        mentors: MentorBreakdown {
            total: counts.total_mentors,
            active: counts.active_mentors,
        },
        buddies: BuddyBreakdown {
            total: counts.total_buddies,
            active: counts.active_buddies,
            inactive: counts.inactive_buddies,
            exited: counts.exited_buddies,
        },
    };

    Ok(Json(DataResponse { data: stats }))
}
