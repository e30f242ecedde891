use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{lenient_number, lenient_streak};
use crate::constants::DEFAULT_GOAL_TARGET;

/// One year after `today`, the default goal deadline.
pub fn default_target_date_from(today: NaiveDate) -> NaiveDate {
    today.checked_add_months(Months::new(12)).unwrap_or(today)
}

/// The single savings goal.
///
/// Stored flat inside the persisted blob, next to the record lists.
/// Older blobs have no `metaDate`; the loader fills it in from the
/// caller's `today` before deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Target amount as set by the user. `None` or non-positive means the
    /// default target applies; see [`Goal::target`].
    #[serde(rename = "metaGoal", default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,

    #[serde(rename = "metaDate")]
    pub target_date: NaiveDate,

    /// Saved so far, kept within `[0, target]` by deposits
    #[serde(rename = "metaAtual", default, deserialize_with = "lenient_number")]
    pub accumulated: f64,

    /// Deposits made since the last frivolous expense or reset
    #[serde(default, deserialize_with = "lenient_streak")]
    pub streak: u32,
}

impl Goal {
    /// A fresh goal: default target, deadline one year from `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            target_amount: None,
            target_date: default_target_date_from(today),
            accumulated: 0.0,
            streak: 0,
        }
    }

    /// Effective target amount.
    pub fn target(&self) -> f64 {
        self.target_amount
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or(DEFAULT_GOAL_TARGET)
    }

    pub fn is_reached(&self) -> bool {
        self.accumulated >= self.target()
    }
}
