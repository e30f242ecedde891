use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::bill::Bill;
use super::expense::ExpenseCategory;
use super::insight::{Insight, MotivationalMessage};

/// Spending in one category over a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// One month of the savings projection chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// `M0`, `M1`, ...
    pub label: String,
    pub projected: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneKind {
    Start,
    FirstThousand,
    Quarter,
    Half,
    ThreeQuarters,
    GoalReached,
}

/// A checkpoint on the way to the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub value: f64,
    pub reached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Spend less every month
    SpendingCut,
    /// Earn more every month
    ExtraIncome,
}

/// Result of a "what if" simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    /// Amount saved by the deadline, capped for display
    pub projected: f64,
    /// Progress toward the goal, capped at 100
    pub progress_pct: f64,
    pub reaches_goal: bool,
}

/// Everything the dashboard shows, computed from one store snapshot at
/// one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDateTime,
    pub monthly_income: f64,
    pub month_expenses: f64,
    /// Income minus expenses; negative when overspending
    pub available_balance: f64,
    pub frivolous_total: f64,
    pub categories: Vec<CategoryTotal>,

    pub target: f64,
    pub target_date: NaiveDate,
    pub accumulated: f64,
    pub progress_pct: f64,
    pub remaining: f64,
    pub days_remaining: i64,
    pub months_remaining: i64,
    pub required_monthly: f64,
    pub streak: u32,

    /// Earliest unpaid bill
    pub next_bill: Option<Bill>,
    pub urgent_bill_count: usize,
    pub pending_bills_total: f64,

    pub insights: Vec<Insight>,
    pub motivation: MotivationalMessage,
}
