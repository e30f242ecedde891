use chrono::NaiveDateTime;

use crate::constants::BILL_URGENCY_DAYS;
use crate::models::bill::Bill;
use crate::models::expense::{CategoryFilter, Expense, ExpenseCategory};
use crate::models::income::IncomeEntry;
use crate::models::store::FinanceStore;
use crate::models::summary::CategoryTotal;
use super::period_service::PeriodService;

/// Monthly totals, balances and bill lookups derived from the store.
///
/// Pure business logic — no I/O, never mutates the store. Every
/// time-dependent method takes `now` explicitly.
pub struct MetricsService {
    period_service: PeriodService,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            period_service: PeriodService::new(),
        }
    }

    // ── Income & Expenses ───────────────────────────────────────────

    pub fn total_income_for_month(&self, entries: &[IncomeEntry], month: u32, year: i32) -> f64 {
        self.period_service.total_for_month(entries, month, year)
    }

    pub fn total_expenses_for_month(&self, expenses: &[Expense], month: u32, year: i32) -> f64 {
        self.period_service.total_for_month(expenses, month, year)
    }

    /// Income used for every balance computation.
    ///
    /// An override set by the user always wins; otherwise the entries
    /// dated in the current month are summed.
    pub fn monthly_income(&self, store: &FinanceStore, now: NaiveDateTime) -> f64 {
        match store.income_override() {
            Some(fixed) => fixed,
            None => self
                .period_service
                .total_for_current_month(&store.incomes, now),
        }
    }

    pub fn month_expenses(&self, store: &FinanceStore, now: NaiveDateTime) -> f64 {
        self.period_service
            .total_for_current_month(&store.expenses, now)
    }

    /// Monthly income minus this month's expenses. Negative when overspending.
    pub fn available_balance(&self, store: &FinanceStore, now: NaiveDateTime) -> f64 {
        self.monthly_income(store, now) - self.month_expenses(store, now)
    }

    /// One entry per category, in [`ExpenseCategory::ALL`] order, zero-filled.
    pub fn expenses_by_category(&self, expenses: &[Expense], month: u32, year: i32) -> Vec<CategoryTotal> {
        let in_month = self.period_service.filter_by_month(expenses, month, year);
        ExpenseCategory::ALL
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: in_month
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect()
    }

    pub fn frivolous_total(&self, expenses: &[Expense], month: u32, year: i32) -> f64 {
        self.period_service
            .filter_by_month(expenses, month, year)
            .into_iter()
            .filter(|e| e.is_frivolous())
            .map(|e| e.amount)
            .sum()
    }

    pub fn total_income_all_time(&self, entries: &[IncomeEntry]) -> f64 {
        entries.iter().map(|e| e.amount).sum()
    }

    /// Expenses matching `filter`, newest first. Equal dates keep input order.
    pub fn expenses_filtered<'a>(&self, expenses: &'a [Expense], filter: CategoryFilter) -> Vec<&'a Expense> {
        let mut matching: Vec<&Expense> = expenses
            .iter()
            .filter(|e| filter.matches(e.category))
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        matching
    }

    // ── Bills ───────────────────────────────────────────────────────

    /// Unpaid bills, earliest due date first. Ties keep input order.
    pub fn upcoming_bills<'a>(&self, bills: &'a [Bill]) -> Vec<&'a Bill> {
        let mut unpaid: Vec<&Bill> = bills.iter().filter(|b| !b.paid).collect();
        unpaid.sort_by_key(|b| b.due_date);
        unpaid
    }

    /// The single most urgent unpaid bill.
    pub fn next_bill<'a>(&self, bills: &'a [Bill]) -> Option<&'a Bill> {
        self.upcoming_bills(bills).into_iter().next()
    }

    pub fn paid_bills<'a>(&self, bills: &'a [Bill]) -> Vec<&'a Bill> {
        bills.iter().filter(|b| b.paid).collect()
    }

    /// Whole days from the start of today to the due date. Negative when overdue.
    pub fn days_until_due(&self, bill: &Bill, now: NaiveDateTime) -> i64 {
        (bill.due_date - now.date()).num_days()
    }

    /// Unpaid bills due within [`BILL_URGENCY_DAYS`] days, overdue ones included.
    pub fn urgent_bills<'a>(&self, bills: &'a [Bill], now: NaiveDateTime) -> Vec<&'a Bill> {
        self.upcoming_bills(bills)
            .into_iter()
            .filter(|b| self.days_until_due(b, now) <= BILL_URGENCY_DAYS)
            .collect()
    }

    /// Sum of the current installment of every unpaid bill.
    pub fn pending_bills_total(&self, bills: &[Bill]) -> f64 {
        bills
            .iter()
            .filter(|b| !b.paid)
            .map(Bill::installment_amount)
            .sum()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
