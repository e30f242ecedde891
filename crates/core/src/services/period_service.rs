use chrono::{Datelike, NaiveDateTime};

use crate::models::{Dated, Valued};

/// Selects records by calendar month.
///
/// Months are 1-based (January = 1), as in `chrono`. Filtering is stable:
/// matching records keep their input order.
pub struct PeriodService;

impl PeriodService {
    pub fn new() -> Self {
        Self
    }

    /// Records whose date falls in `month`/`year`.
    pub fn filter_by_month<'a, T: Dated>(&self, records: &'a [T], month: u32, year: i32) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| {
                let date = r.date();
                date.month() == month && date.year() == year
            })
            .collect()
    }

    /// Records dated in the same month as `now`.
    pub fn filter_current_month<'a, T: Dated>(&self, records: &'a [T], now: NaiveDateTime) -> Vec<&'a T> {
        self.filter_by_month(records, now.month(), now.year())
    }

    /// Sum of amounts in `month`/`year`. Empty window sums to zero.
    pub fn total_for_month<T: Dated + Valued>(&self, records: &[T], month: u32, year: i32) -> f64 {
        self.filter_by_month(records, month, year)
            .into_iter()
            .map(|r| r.amount())
            .sum()
    }

    pub fn total_for_current_month<T: Dated + Valued>(&self, records: &[T], now: NaiveDateTime) -> f64 {
        self.total_for_month(records, now.month(), now.year())
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}
