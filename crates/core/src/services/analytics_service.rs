use chrono::{Datelike, NaiveDateTime};

use crate::models::store::FinanceStore;
use crate::models::summary::DashboardSummary;
use super::format_service::FormatService;
use super::goal_service::GoalService;
use super::insight_service::InsightService;
use super::metrics_service::MetricsService;

/// Builds the dashboard snapshot: monthly totals, goal progress, bills,
/// insights and the motivational message.
///
/// Every figure is computed from the same `now`, so a bill cannot be
/// "due in 3 days" in one tile and "due in 2 days" in another.
pub struct AnalyticsService {
    metrics_service: MetricsService,
    goal_service: GoalService,
    insight_service: InsightService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            metrics_service: MetricsService::new(),
            goal_service: GoalService::new(),
            insight_service: InsightService::new(),
        }
    }

    pub fn dashboard_summary(
        &self,
        store: &FinanceStore,
        now: NaiveDateTime,
        format: &FormatService,
    ) -> DashboardSummary {
        let goal = &store.goal;
        let target = goal.target();
        let (month, year) = (now.month(), now.year());

        DashboardSummary {
            as_of: now,
            monthly_income: self.metrics_service.monthly_income(store, now),
            month_expenses: self.metrics_service.month_expenses(store, now),
            available_balance: self.metrics_service.available_balance(store, now),
            frivolous_total: self
                .metrics_service
                .frivolous_total(&store.expenses, month, year),
            categories: self
                .metrics_service
                .expenses_by_category(&store.expenses, month, year),

            target,
            target_date: goal.target_date,
            accumulated: goal.accumulated,
            progress_pct: self.goal_service.progress_pct(goal.accumulated, target),
            remaining: self.goal_service.remaining(goal.accumulated, target),
            days_remaining: self.goal_service.days_remaining(goal.target_date, now),
            months_remaining: self.goal_service.months_remaining(goal.target_date, now),
            required_monthly: self.goal_service.required_monthly_savings(
                goal.accumulated,
                target,
                goal.target_date,
                now,
            ),
            streak: goal.streak,

            next_bill: self.metrics_service.next_bill(&store.bills).cloned(),
            urgent_bill_count: self.metrics_service.urgent_bills(&store.bills, now).len(),
            pending_bills_total: self.metrics_service.pending_bills_total(&store.bills),

            insights: self.insight_service.generate_insights(store, now, format),
            motivation: self.insight_service.motivational_message(
                goal.accumulated,
                target,
                goal.target_date,
                now,
                format,
            ),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
