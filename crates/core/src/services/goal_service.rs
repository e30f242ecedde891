use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};

use crate::constants::{DAYS_PER_MONTH, DEFAULT_GOAL_TARGET};
use crate::errors::CoreError;
use crate::models::goal::Goal;

const SECONDS_PER_DAY: i64 = 86_400;

/// Savings-goal arithmetic and the goal's own mutations (deposit, reset, edit).
///
/// The arithmetic takes plain numbers so it can be reused for
/// simulations. Every function is total: a non-positive target yields 0%
/// progress, and the months-remaining floor of 1 keeps the required
/// savings rate finite once the deadline has passed.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    // ── Progress ────────────────────────────────────────────────────

    /// Percentage of the target saved, within `[0, 100]`.
    pub fn progress_pct(&self, accumulated: f64, target: f64) -> f64 {
        if target.is_nan() || target <= 0.0 {
            return 0.0;
        }
        let pct = accumulated / target * 100.0;
        if pct.is_nan() {
            return 0.0;
        }
        pct.clamp(0.0, 100.0)
    }

    pub fn remaining(&self, accumulated: f64, target: f64) -> f64 {
        (target - accumulated).max(0.0)
    }

    /// Days left until the end of `target_date`, counted from the start of
    /// today. The deadline day itself counts, so a deadline of today
    /// leaves 1 day; a past deadline leaves 0.
    pub fn days_remaining(&self, target_date: NaiveDate, now: NaiveDateTime) -> i64 {
        let deadline = target_date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));
        let start_of_today = now.date().and_time(NaiveTime::MIN);
        let seconds = (deadline - start_of_today).num_seconds();
        if seconds <= 0 {
            0
        } else {
            (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
        }
    }

    /// Months left, in 30-day blocks, never less than 1.
    pub fn months_remaining(&self, target_date: NaiveDate, now: NaiveDateTime) -> i64 {
        let days = self.days_remaining(target_date, now);
        ((days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH).max(1)
    }

    /// How much must be saved each month to reach the target on time.
    pub fn required_monthly_savings(
        &self,
        accumulated: f64,
        target: f64,
        target_date: NaiveDate,
        now: NaiveDateTime,
    ) -> f64 {
        let months = self.months_remaining(target_date, now);
        self.remaining(accumulated, target) / months as f64
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add a manual deposit. The balance never exceeds the target, and
    /// each deposit extends the streak by one.
    /// Returns the new accumulated amount.
    pub fn deposit(&self, goal: &mut Goal, amount: f64) -> Result<f64, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!("Rejected goal deposit of {amount}");
            return Err(CoreError::ValidationError(
                "Deposit amount must be positive".into(),
            ));
        }

        let target = goal.target();
        goal.accumulated = (goal.accumulated + amount).min(target).max(0.0);
        goal.streak = goal.streak.saturating_add(1);
        debug!(
            "Deposited {amount}: accumulated {} of {target}, streak {}",
            goal.accumulated, goal.streak
        );
        Ok(goal.accumulated)
    }

    /// Start over: nothing saved, no streak. Target and deadline stay.
    pub fn reset(&self, goal: &mut Goal) {
        goal.accumulated = 0.0;
        goal.streak = 0;
        debug!("Goal progress reset");
    }

    /// Change the target amount and deadline. A non-positive or
    /// non-numeric amount falls back to the default target.
    pub fn update(&self, goal: &mut Goal, target_amount: f64, target_date: NaiveDate) {
        let target = if target_amount.is_finite() && target_amount > 0.0 {
            target_amount
        } else {
            DEFAULT_GOAL_TARGET
        };
        goal.target_amount = Some(target);
        goal.target_date = target_date;
        debug!("Goal updated: {target} by {target_date}");
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
