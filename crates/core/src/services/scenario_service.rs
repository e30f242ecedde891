use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::{FIRST_MILESTONE_AMOUNT, SIMULATION_CAP_FACTOR};
use crate::models::summary::{Milestone, MilestoneKind, ProjectionPoint, ScenarioKind, ScenarioOutcome};
use super::goal_service::GoalService;

/// "What if" projections over the months left until the deadline.
///
/// Simulated balances are capped at 1.5× the target so slider-driven
/// charts stay bounded; the cap says nothing about the goal itself.
pub struct ScenarioService {
    goal_service: GoalService,
}

impl ScenarioService {
    pub fn new() -> Self {
        Self {
            goal_service: GoalService::new(),
        }
    }

    /// Balance at the deadline if `monthly_cut` less is spent every month.
    pub fn simulate_cut(&self, accumulated: f64, target: f64, monthly_cut: f64, months: i64) -> f64 {
        Self::project(accumulated, target, monthly_cut, months)
    }

    /// Balance at the deadline if `monthly_extra` more is earned every month.
    pub fn simulate_extra_income(&self, accumulated: f64, target: f64, monthly_extra: f64, months: i64) -> f64 {
        Self::project(accumulated, target, monthly_extra, months)
    }

    /// Run a simulation and describe how it compares to the target.
    pub fn outcome(
        &self,
        kind: ScenarioKind,
        accumulated: f64,
        target: f64,
        monthly_delta: f64,
        months: i64,
    ) -> ScenarioOutcome {
        let projected = match kind {
            ScenarioKind::SpendingCut => self.simulate_cut(accumulated, target, monthly_delta, months),
            ScenarioKind::ExtraIncome => {
                self.simulate_extra_income(accumulated, target, monthly_delta, months)
            }
        };
        ScenarioOutcome {
            kind,
            projected,
            progress_pct: self.goal_service.progress_pct(projected, target),
            reaches_goal: projected >= target,
        }
    }

    /// Month-by-month balance when saving exactly the required amount.
    ///
    /// Returns `months_remaining + 1` points, from today (`M0`) to the deadline.
    pub fn projection(
        &self,
        accumulated: f64,
        target: f64,
        target_date: NaiveDate,
        now: NaiveDateTime,
    ) -> Vec<ProjectionPoint> {
        let months = self.goal_service.months_remaining(target_date, now);
        let per_month = self
            .goal_service
            .required_monthly_savings(accumulated, target, target_date, now);

        (0..=months)
            .map(|i| ProjectionPoint {
                label: format!("M{i}"),
                projected: (accumulated + per_month * i as f64).min(target),
                target,
            })
            .collect()
    }

    /// Fixed checkpoints: start, first thousand, 25/50/75% and the target.
    pub fn milestones(&self, accumulated: f64, target: f64) -> Vec<Milestone> {
        [
            (MilestoneKind::Start, 0.0),
            (MilestoneKind::FirstThousand, FIRST_MILESTONE_AMOUNT),
            (MilestoneKind::Quarter, target * 0.25),
            (MilestoneKind::Half, target * 0.5),
            (MilestoneKind::ThreeQuarters, target * 0.75),
            (MilestoneKind::GoalReached, target),
        ]
        .into_iter()
        .map(|(kind, value)| Milestone {
            kind,
            value,
            reached: kind == MilestoneKind::Start || accumulated >= value,
        })
        .collect()
    }

    fn project(accumulated: f64, target: f64, monthly_delta: f64, months: i64) -> f64 {
        (accumulated + monthly_delta * months as f64).min(target * SIMULATION_CAP_FACTOR)
    }
}

impl Default for ScenarioService {
    fn default() -> Self {
        Self::new()
    }
}
