//! Pure derivation math for progress tracking and dashboard aggregates.
//!
//! Kept free of any database or HTTP dependency so the rounding and
//! zero-denominator behaviour can be unit-tested directly.

/// Percentage of checked topics out of the buddy's full domain topic set.
///
/// Returns `0` when the domain has no topics (never divides by zero).
/// Rounds to the nearest integer, so 1 of 3 topics yields 33.
pub fn completion_percentage(checked: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (checked as f64 / total as f64) * 100.0;
    pct.round() as u8
}

/// System-wide task completion rate: completed tasks out of all tasks.
///
/// Same rounding and empty-set behaviour as [`completion_percentage`].
pub fn completion_rate(completed: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i64
}
