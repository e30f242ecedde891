use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bill::Bill;
use super::expense::Expense;
use super::goal::Goal;
use super::income::IncomeEntry;
use super::{lenient_number, RecordId};

/// The whole user data set. Everything in here is persisted as one JSON
/// record under [`crate::constants::STORAGE_KEY`].
///
/// Field names follow the blob layout the app has always written, so
/// existing data loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceStore {
    #[serde(rename = "entradas", default)]
    pub incomes: Vec<IncomeEntry>,

    #[serde(rename = "gastos", default)]
    pub expenses: Vec<Expense>,

    #[serde(rename = "contas", default)]
    pub bills: Vec<Bill>,

    /// Fixed monthly income set by the user. Zero means "not set".
    #[serde(rename = "rendaMensal", default, deserialize_with = "lenient_number")]
    pub monthly_income_override: f64,

    #[serde(flatten)]
    pub goal: Goal,
}

impl FinanceStore {
    /// An empty store whose goal deadline is one year from `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            bills: Vec::new(),
            monthly_income_override: 0.0,
            goal: Goal::new(today),
        }
    }

    /// The override, when one is set.
    pub fn income_override(&self) -> Option<f64> {
        Some(self.monthly_income_override).filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Next free record id across all three record lists.
    pub fn next_id(&self) -> RecordId {
        let max_income = self.incomes.iter().map(|e| e.id).max();
        let max_expense = self.expenses.iter().map(|e| e.id).max();
        let max_bill = self.bills.iter().map(|b| b.id).max();
        [max_income, max_expense, max_bill]
            .into_iter()
            .flatten()
            .max()
            .map_or(1, |id| id.saturating_add(1))
    }

    pub fn record_count(&self) -> usize {
        self.incomes.len() + self.expenses.len() + self.bills.len()
    }
}
