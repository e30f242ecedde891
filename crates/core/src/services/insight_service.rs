use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::constants::{
    BILL_URGENCY_DAYS, FRIVOLOUS_ALERT_THRESHOLD, MILD_STREAK_DAYS, STRONG_STREAK_DAYS,
};
use crate::models::insight::{Insight, InsightKind, MotivationTier, MotivationalMessage};
use crate::models::store::FinanceStore;
use super::format_service::FormatService;
use super::goal_service::GoalService;
use super::metrics_service::MetricsService;

/// Rule-based dashboard messages.
///
/// Rules are evaluated in a fixed order and are independent of each
/// other, except within the plan rule (ahead / behind) and the streak
/// rule (strong / mild), where at most one message fires.
pub struct InsightService {
    metrics_service: MetricsService,
    goal_service: GoalService,
}

impl InsightService {
    pub fn new() -> Self {
        Self {
            metrics_service: MetricsService::new(),
            goal_service: GoalService::new(),
        }
    }

    /// Generate the insight list for the dashboard, in rule order:
    /// 1. frivolous spending above the alert threshold
    /// 2. ahead of plan, or behind plan when there is income this month
    /// 3. unpaid bills due soon
    /// 4. streak encouragement (strong or mild)
    /// 5. goal reached
    pub fn generate_insights(
        &self,
        store: &FinanceStore,
        now: NaiveDateTime,
        format: &FormatService,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();
        let goal = &store.goal;
        let target = goal.target();

        let frivolous = self
            .metrics_service
            .frivolous_total(&store.expenses, now.month(), now.year());
        if frivolous > FRIVOLOUS_ALERT_THRESHOLD {
            insights.push(Insight::new(
                InsightKind::FrivolousSpending,
                format!(
                    "You spent {} on frivolous purchases this month",
                    format.currency(frivolous)
                ),
            ));
        }

        let income = self.metrics_service.monthly_income(store, now);
        let balance = self.metrics_service.available_balance(store, now);
        let required = self.goal_service.required_monthly_savings(
            goal.accumulated,
            target,
            goal.target_date,
            now,
        );
        if balance > required {
            insights.push(Insight::new(
                InsightKind::AheadOfPlan,
                format!(
                    "You are {} ahead of plan this month!",
                    format.currency(balance - required)
                ),
            ));
        } else if income > 0.0 && balance < required {
            insights.push(Insight::new(
                InsightKind::BehindPlan,
                format!(
                    "You are {} short of what you need this month",
                    format.currency(required - balance)
                ),
            ));
        }

        let urgent = self.metrics_service.urgent_bills(&store.bills, now).len();
        if urgent > 0 {
            insights.push(Insight::new(
                InsightKind::BillsDueSoon,
                format!("{urgent} bill(s) due within {BILL_URGENCY_DAYS} days!"),
            ));
        }

        if goal.streak >= STRONG_STREAK_DAYS {
            insights.push(Insight::new(
                InsightKind::StreakStrong,
                format!(
                    "{} days without frivolous spending! You're amazing!",
                    goal.streak
                ),
            ));
        } else if goal.streak >= MILD_STREAK_DAYS {
            insights.push(Insight::new(
                InsightKind::StreakMild,
                format!(
                    "{} days in a row without frivolous spending. Keep going!",
                    goal.streak
                ),
            ));
        }

        if goal.accumulated >= target {
            insights.push(Insight::new(
                InsightKind::GoalReached,
                format!(
                    "CONGRATULATIONS! You reached your goal of {}!",
                    format.currency(target)
                ),
            ));
        }

        insights
    }

    /// Pick the motivational message for the current progress tier.
    /// Tiers are checked from the top; the first match wins.
    pub fn motivational_message(
        &self,
        accumulated: f64,
        target: f64,
        target_date: NaiveDate,
        now: NaiveDateTime,
        format: &FormatService,
    ) -> MotivationalMessage {
        let pct = self.goal_service.progress_pct(accumulated, target);
        let remaining = self.goal_service.remaining(accumulated, target);
        let required = self
            .goal_service
            .required_monthly_savings(accumulated, target, target_date, now);
        let months = self.goal_service.months_remaining(target_date, now);

        let (tier, text) = if pct >= 100.0 {
            (
                MotivationTier::GoalReached,
                "🏆 GOAL ACHIEVED! You're amazing!".to_string(),
            )
        } else if pct >= 75.0 {
            (
                MotivationTier::AlmostThere,
                format!("Almost there! Only {} to go! 🔥", format.currency(remaining)),
            )
        } else if pct >= 50.0 {
            (
                MotivationTier::Halfway,
                format!(
                    "Halfway there! Save {}/month and you'll make it! 💪",
                    format.currency(required)
                ),
            )
        } else if pct >= 25.0 {
            (
                MotivationTier::GoodStart,
                format!(
                    "Great start! Save {}/month and you'll get there in {months} months!",
                    format.currency(required)
                ),
            )
        } else {
            (
                MotivationTier::JustStarting,
                format!(
                    "Every bit counts. Start today and save {}/month! 🌱",
                    format.currency(required)
                ),
            )
        };

        MotivationalMessage { tier, text }
    }
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new()
    }
}
