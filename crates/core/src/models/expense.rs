use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_number, Dated, RecordId, Valued};

/// The four fixed spending categories.
///
/// The set is closed so category breakdowns always have the same shape
/// and order, whatever the data contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Essenciais")]
    Essential,
    #[serde(rename = "Investimentos")]
    Investment,
    #[serde(rename = "Lazer")]
    Leisure,
    /// Impulse spending. Recording one resets the savings streak.
    #[serde(rename = "Bobagens")]
    Frivolous,
}

impl ExpenseCategory {
    /// Categories in display order.
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Essential,
        ExpenseCategory::Investment,
        ExpenseCategory::Leisure,
        ExpenseCategory::Frivolous,
    ];
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Essential => write!(f, "Essential"),
            ExpenseCategory::Investment => write!(f, "Investment"),
            ExpenseCategory::Leisure => write!(f, "Leisure"),
            ExpenseCategory::Frivolous => write!(f, "Frivolous"),
        }
    }
}

/// Filter for expense listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ExpenseCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ExpenseCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// A single categorized expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,

    #[serde(rename = "categoria")]
    pub category: ExpenseCategory,

    #[serde(rename = "valor", default, deserialize_with = "lenient_number")]
    pub amount: f64,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "data")]
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: RecordId,
        category: ExpenseCategory,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category,
            amount,
            description: description.into(),
            date,
        }
    }

    pub fn is_frivolous(&self) -> bool {
        self.category == ExpenseCategory::Frivolous
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Valued for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
