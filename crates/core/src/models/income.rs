use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_number, Dated, RecordId, Valued};

/// Source of an income entry.
///
/// Serialized with the labels the persisted blob has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeKind {
    #[serde(rename = "Salário")]
    Salary,
    #[serde(rename = "Renda extra")]
    ExtraIncome,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Investimento")]
    Investment,
    #[serde(rename = "Outro")]
    Other,
}

impl IncomeKind {
    pub const ALL: [IncomeKind; 5] = [
        IncomeKind::Salary,
        IncomeKind::ExtraIncome,
        IncomeKind::Freelance,
        IncomeKind::Investment,
        IncomeKind::Other,
    ];
}

impl std::fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeKind::Salary => write!(f, "Salary"),
            IncomeKind::ExtraIncome => write!(f, "Extra income"),
            IncomeKind::Freelance => write!(f, "Freelance"),
            IncomeKind::Investment => write!(f, "Investment"),
            IncomeKind::Other => write!(f, "Other"),
        }
    }
}

/// A single income entry (salary, side job, dividends...).
///
/// Entries are created and deleted by the user; they are never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: RecordId,

    #[serde(rename = "tipo")]
    pub kind: IncomeKind,

    /// Amount received (non-negative)
    #[serde(rename = "valor", default, deserialize_with = "lenient_number")]
    pub amount: f64,

    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Day the income was received
    #[serde(rename = "data")]
    pub date: NaiveDate,

    /// Whether the entry repeats every month (informational only)
    #[serde(rename = "recorrente", default)]
    pub recurring: bool,
}

impl IncomeEntry {
    pub fn new(
        id: RecordId,
        kind: IncomeKind,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        recurring: bool,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            description: description.into(),
            date,
            recurring,
        }
    }
}

impl Dated for IncomeEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Valued for IncomeEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
}
