//! Business thresholds and defaults.
//!
//! These are hard-coded in the app today. The alert threshold and the
//! urgency window are candidates for a user-facing setting later.

/// Goal target used when none (or a non-positive one) has been set.
pub const DEFAULT_GOAL_TARGET: f64 = 10_000.0;

/// Frivolous spending above this amount in a month raises a warning.
pub const FRIVOLOUS_ALERT_THRESHOLD: f64 = 150.0;

/// Unpaid bills due within this many days (inclusive) are urgent.
pub const BILL_URGENCY_DAYS: i64 = 3;

/// Streak length for the strong encouragement insight.
pub const STRONG_STREAK_DAYS: u32 = 7;

/// Streak length for the mild encouragement insight.
pub const MILD_STREAK_DAYS: u32 = 3;

/// Scenario projections are capped at `target * SIMULATION_CAP_FACTOR`
/// to keep slider-driven charts bounded.
pub const SIMULATION_CAP_FACTOR: f64 = 1.5;

/// Days per month used when converting the remaining days into months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Absolute milestone shown before the percentage milestones.
pub const FIRST_MILESTONE_AMOUNT: f64 = 1_000.0;

/// Key under which the store blob is persisted.
pub const STORAGE_KEY: &str = "financeApp_data";
