use chrono::NaiveDate;
use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::bill::{Bill, BillKind};
use crate::models::expense::{Expense, ExpenseCategory};
use crate::models::income::{IncomeEntry, IncomeKind};
use crate::models::store::FinanceStore;
use crate::models::RecordId;

/// Adds, removes and toggles records in the store.
///
/// Deletions are destructive; there is no history of edits.
pub struct RecordService;

impl RecordService {
    pub fn new() -> Self {
        Self
    }

    // ── Income ──────────────────────────────────────────────────────

    pub fn add_income(
        &self,
        store: &mut FinanceStore,
        kind: IncomeKind,
        amount: f64,
        description: &str,
        date: NaiveDate,
        recurring: bool,
    ) -> Result<RecordId, CoreError> {
        Self::validate_amount(amount)?;
        let description = Self::validate_description(description)?;

        let id = store.next_id();
        store
            .incomes
            .push(IncomeEntry::new(id, kind, amount, description, date, recurring));
        debug!("Added income {id}: {kind} {amount} on {date}");
        Ok(id)
    }

    pub fn remove_income(&self, store: &mut FinanceStore, id: RecordId) -> Result<IncomeEntry, CoreError> {
        let idx = store
            .incomes
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("Income entry", id))?;
        debug!("Removed income {id}");
        Ok(store.incomes.remove(idx))
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Record an expense. A frivolous expense, of any amount, resets the
    /// savings streak.
    pub fn add_expense(
        &self,
        store: &mut FinanceStore,
        category: ExpenseCategory,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> Result<RecordId, CoreError> {
        Self::validate_amount(amount)?;
        let description = Self::validate_description(description)?;

        let id = store.next_id();
        let expense = Expense::new(id, category, amount, description, date);
        if expense.is_frivolous() {
            debug!("Frivolous expense {id}: streak of {} reset", store.goal.streak);
            store.goal.streak = 0;
        }
        store.expenses.push(expense);
        debug!("Added expense {id}: {category} {amount} on {date}");
        Ok(id)
    }

    pub fn remove_expense(&self, store: &mut FinanceStore, id: RecordId) -> Result<Expense, CoreError> {
        let idx = store
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("Expense", id))?;
        debug!("Removed expense {id}");
        Ok(store.expenses.remove(idx))
    }

    // ── Bills ───────────────────────────────────────────────────────

    /// Add an unpaid bill at its first installment.
    pub fn add_bill(
        &self,
        store: &mut FinanceStore,
        kind: BillKind,
        description: &str,
        total_amount: f64,
        installment_count: u32,
        due_date: NaiveDate,
    ) -> Result<RecordId, CoreError> {
        Self::validate_amount(total_amount)?;
        let description = Self::validate_description(description)?;
        if installment_count == 0 {
            warn!("Rejected bill with zero installments");
            return Err(CoreError::ValidationError(
                "Installment count must be at least 1".into(),
            ));
        }

        let id = store.next_id();
        store.bills.push(Bill::new(
            id,
            kind,
            description,
            total_amount,
            installment_count,
            due_date,
        ));
        debug!("Added bill {id}: {kind} {total_amount} in {installment_count}x due {due_date}");
        Ok(id)
    }

    /// Flip the paid flag. Paid bills stay in the store.
    /// Returns the new paid state.
    pub fn toggle_bill_paid(&self, store: &mut FinanceStore, id: RecordId) -> Result<bool, CoreError> {
        let bill = store
            .bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::not_found("Bill", id))?;
        bill.paid = !bill.paid;
        debug!("Bill {id} paid = {}", bill.paid);
        Ok(bill.paid)
    }

    pub fn remove_bill(&self, store: &mut FinanceStore, id: RecordId) -> Result<Bill, CoreError> {
        let idx = store
            .bills
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| CoreError::not_found("Bill", id))?;
        debug!("Removed bill {id}");
        Ok(store.bills.remove(idx))
    }

    // ── Monthly income override ─────────────────────────────────────

    /// Set a fixed monthly income. Zero clears the override.
    pub fn set_monthly_income(&self, store: &mut FinanceStore, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            warn!("Rejected monthly income override of {amount}");
            return Err(CoreError::ValidationError(
                "Monthly income must be zero or a positive number".into(),
            ));
        }
        store.monthly_income_override = amount;
        debug!("Monthly income override set to {amount}");
        Ok(())
    }

    // ── Validation ──────────────────────────────────────────────────

    fn validate_amount(amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!("Rejected record amount {amount}");
            return Err(CoreError::ValidationError(
                "Amount must be a positive number".into(),
            ));
        }
        Ok(())
    }

    fn validate_description(description: &str) -> Result<String, CoreError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            warn!("Rejected record without description");
            return Err(CoreError::ValidationError(
                "Description must not be empty".into(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for RecordService {
    fn default() -> Self {
        Self::new()
    }
}
