use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_installments, lenient_number, Dated, RecordId};

/// How a bill is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillKind {
    /// Credit card statement
    #[serde(rename = "Cartão")]
    Card,
    /// Bank slip / invoice
    #[serde(rename = "Boleto")]
    Invoice,
    /// Purchase split into installments
    #[serde(rename = "Parcelamento")]
    Installment,
}

impl std::fmt::Display for BillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillKind::Card => write!(f, "Card"),
            BillKind::Invoice => write!(f, "Invoice"),
            BillKind::Installment => write!(f, "Installment"),
        }
    }
}

fn one() -> u32 {
    1
}

/// A bill to pay, possibly split into equal installments.
///
/// The per-installment amount is always derived from the total and the
/// installment count; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: RecordId,

    #[serde(rename = "tipo")]
    pub kind: BillKind,

    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Total amount across all installments
    #[serde(rename = "valor", default, deserialize_with = "lenient_number")]
    pub total_amount: f64,

    #[serde(rename = "parcelas", default = "one", deserialize_with = "lenient_installments")]
    pub installment_count: u32,

    #[serde(rename = "parcelaAtual", default = "one", deserialize_with = "lenient_installments")]
    pub current_installment: u32,

    #[serde(rename = "vencimento")]
    pub due_date: NaiveDate,

    #[serde(rename = "pago", default)]
    pub paid: bool,
}

impl Bill {
    /// Create an unpaid bill at its first installment.
    pub fn new(
        id: RecordId,
        kind: BillKind,
        description: impl Into<String>,
        total_amount: f64,
        installment_count: u32,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            total_amount,
            installment_count,
            current_installment: 1,
            due_date,
            paid: false,
        }
    }

    /// Amount due per installment. A zero count in a hand-edited blob is
    /// treated as a single installment.
    pub fn installment_amount(&self) -> f64 {
        self.total_amount / f64::from(self.installment_count.max(1))
    }
}

impl Dated for Bill {
    fn date(&self) -> NaiveDate {
        self.due_date
    }
}
