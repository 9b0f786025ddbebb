//! Dashboard aggregate queries.

use sqlx::PgPool;

use crate::models::stats::DashboardCounts;

/// Read-only aggregates over mentors, buddies, and tasks.
pub struct StatsRepo;

impl StatsRepo {
    /// One snapshot of all dashboard counts.
    ///
    /// `weekly_tasks` is a rolling seven-day window computed at call
    /// time, never a stored counter.
    pub async fn dashboard_counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT
                 (SELECT COUNT(*) FROM mentors)                            AS total_mentors,
                 (SELECT COUNT(*) FROM mentors WHERE is_active)            AS active_mentors,
                 (SELECT COUNT(*) FROM buddies)                            AS total_buddies,
                 (SELECT COUNT(*) FROM buddies WHERE status = 'active')    AS active_buddies,
                 (SELECT COUNT(*) FROM buddies WHERE status = 'inactive')  AS inactive_buddies,
                 (SELECT COUNT(*) FROM buddies WHERE status = 'exited')    AS exited_buddies,
                 (SELECT COUNT(*) FROM tasks
                   WHERE created_at >= NOW() - INTERVAL '7 days')          AS weekly_tasks,
                 (SELECT COUNT(*) FROM tasks)                              AS total_tasks,
                 (SELECT COUNT(*) FROM tasks WHERE status = 'completed')   AS completed_tasks",
        )
        .fetch_one(pool)
        .await
    }
}
