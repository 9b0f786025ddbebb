//! Raw dashboard aggregate counts.

use sqlx::FromRow;

/// Single-row aggregate snapshot across mentors, buddies, and tasks.
///
/// Always recomputed at call time; nothing here is persisted. The
/// completion rate is derived from `completed_tasks` / `total_tasks`
/// by the API layer.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCounts {
    pub total_mentors: i64,
    pub active_mentors: i64,
    pub total_buddies: i64,
    pub active_buddies: i64,
    pub inactive_buddies: i64,
    pub exited_buddies: i64,
    pub weekly_tasks: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}
