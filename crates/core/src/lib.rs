pub mod constants;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use models::{
    bill::{Bill, BillKind},
    expense::{CategoryFilter, Expense, ExpenseCategory},
    income::{IncomeEntry, IncomeKind},
    insight::{Insight, MotivationalMessage},
    settings::Settings,
    store::FinanceStore,
    summary::{CategoryTotal, DashboardSummary, Milestone, ProjectionPoint, ScenarioKind, ScenarioOutcome},
    RecordId,
};
use services::{
    analytics_service::AnalyticsService, format_service::FormatService,
    goal_service::GoalService, insight_service::InsightService,
    metrics_service::MetricsService, record_service::RecordService,
    scenario_service::ScenarioService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Finance OS core library.
/// Holds the store and all services needed to operate on it.
///
/// Queries take `now` explicitly; the caller samples the clock once per
/// render and passes the same value to every query of that render.
#[must_use]
pub struct FinanceTracker {
    store: FinanceStore,
    format_service: FormatService,
    record_service: RecordService,
    metrics_service: MetricsService,
    goal_service: GoalService,
    scenario_service: ScenarioService,
    insight_service: InsightService,
    analytics_service: AnalyticsService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("incomes", &self.store.incomes.len())
            .field("expenses", &self.store.expenses.len())
            .field("bills", &self.store.bills.len())
            .field("settings", self.format_service.settings())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FinanceTracker {
    /// Start with an empty store; the goal deadline is one year from `today`.
    pub fn create_new(today: NaiveDate) -> Self {
        Self::build(FinanceStore::new(today), Settings::default())
    }

    /// Wrap an existing store.
    pub fn from_store(store: FinanceStore) -> Self {
        Self::build(store, Settings::default())
    }

    /// Wrap an existing store with custom display settings.
    pub fn with_settings(store: FinanceStore, settings: Settings) -> Self {
        Self::build(store, settings)
    }

    /// Load from the persisted JSON blob. A blob without a goal deadline
    /// gets one a year after `today`.
    pub fn load_from_str(json: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let store = StorageManager::load_from_str(json, today)?;
        Ok(Self::build(store, Settings::default()))
    }

    /// Serialize to the persisted JSON blob.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_string(&mut self) -> Result<String, CoreError> {
        let json = StorageManager::save_to_string(&self.store)?;
        self.dirty = false;
        Ok(json)
    }

    /// Load from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(
        path: impl AsRef<std::path::Path>,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        let store = StorageManager::load_from_file(path, today)?;
        Ok(Self::build(store, Settings::default()))
    }

    /// Save to a file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.store, path)?;
        self.dirty = false;
        Ok(())
    }

    /// The current store snapshot.
    #[must_use]
    pub fn store(&self) -> &FinanceStore {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.format_service.settings()
    }

    /// Replace the display settings (currency symbol, separators).
    pub fn set_settings(&mut self, settings: Settings) {
        self.format_service = FormatService::new(settings);
    }

    /// Returns `true` if the store has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Income ──────────────────────────────────────────────────────

    pub fn add_income(
        &mut self,
        kind: IncomeKind,
        amount: f64,
        description: &str,
        date: NaiveDate,
        recurring: bool,
    ) -> Result<RecordId, CoreError> {
        let id = self
            .record_service
            .add_income(&mut self.store, kind, amount, description, date, recurring)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_income(&mut self, id: RecordId) -> Result<IncomeEntry, CoreError> {
        let removed = self.record_service.remove_income(&mut self.store, id)?;
        self.dirty = true;
        Ok(removed)
    }

    /// All income entries, in insertion order.
    #[must_use]
    pub fn incomes(&self) -> &[IncomeEntry] {
        &self.store.incomes
    }

    /// Sum of every income entry ever recorded.
    #[must_use]
    pub fn total_income_all_time(&self) -> f64 {
        self.metrics_service.total_income_all_time(&self.store.incomes)
    }

    /// Set a fixed monthly income that replaces the entries' sum. Zero clears it.
    pub fn set_monthly_income(&mut self, amount: f64) -> Result<(), CoreError> {
        self.record_service.set_monthly_income(&mut self.store, amount)?;
        self.dirty = true;
        Ok(())
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Record an expense. Frivolous expenses reset the savings streak.
    pub fn add_expense(
        &mut self,
        category: ExpenseCategory,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> Result<RecordId, CoreError> {
        let id = self
            .record_service
            .add_expense(&mut self.store, category, amount, description, date)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: RecordId) -> Result<Expense, CoreError> {
        let removed = self.record_service.remove_expense(&mut self.store, id)?;
        self.dirty = true;
        Ok(removed)
    }

    /// Expenses matching the filter, newest first.
    #[must_use]
    pub fn expenses(&self, filter: CategoryFilter) -> Vec<&Expense> {
        self.metrics_service
            .expenses_filtered(&self.store.expenses, filter)
    }

    #[must_use]
    pub fn expenses_by_category(&self, month: u32, year: i32) -> Vec<CategoryTotal> {
        self.metrics_service
            .expenses_by_category(&self.store.expenses, month, year)
    }

    #[must_use]
    pub fn frivolous_total(&self, now: NaiveDateTime) -> f64 {
        self.metrics_service
            .frivolous_total(&self.store.expenses, now.month(), now.year())
    }

    // ── Bills ───────────────────────────────────────────────────────

    pub fn add_bill(
        &mut self,
        kind: BillKind,
        description: &str,
        total_amount: f64,
        installment_count: u32,
        due_date: NaiveDate,
    ) -> Result<RecordId, CoreError> {
        let id = self.record_service.add_bill(
            &mut self.store,
            kind,
            description,
            total_amount,
            installment_count,
            due_date,
        )?;
        self.dirty = true;
        Ok(id)
    }

    /// Flip a bill between paid and unpaid. Returns the new state.
    pub fn toggle_bill_paid(&mut self, id: RecordId) -> Result<bool, CoreError> {
        let paid = self.record_service.toggle_bill_paid(&mut self.store, id)?;
        self.dirty = true;
        Ok(paid)
    }

    pub fn remove_bill(&mut self, id: RecordId) -> Result<Bill, CoreError> {
        let removed = self.record_service.remove_bill(&mut self.store, id)?;
        self.dirty = true;
        Ok(removed)
    }

    /// Unpaid bills, earliest due first.
    #[must_use]
    pub fn upcoming_bills(&self) -> Vec<&Bill> {
        self.metrics_service.upcoming_bills(&self.store.bills)
    }

    #[must_use]
    pub fn paid_bills(&self) -> Vec<&Bill> {
        self.metrics_service.paid_bills(&self.store.bills)
    }

    #[must_use]
    pub fn urgent_bills(&self, now: NaiveDateTime) -> Vec<&Bill> {
        self.metrics_service.urgent_bills(&self.store.bills, now)
    }

    #[must_use]
    pub fn pending_bills_total(&self) -> f64 {
        self.metrics_service.pending_bills_total(&self.store.bills)
    }

    // ── Monthly figures ─────────────────────────────────────────────

    #[must_use]
    pub fn monthly_income(&self, now: NaiveDateTime) -> f64 {
        self.metrics_service.monthly_income(&self.store, now)
    }

    #[must_use]
    pub fn month_expenses(&self, now: NaiveDateTime) -> f64 {
        self.metrics_service.month_expenses(&self.store, now)
    }

    #[must_use]
    pub fn available_balance(&self, now: NaiveDateTime) -> f64 {
        self.metrics_service.available_balance(&self.store, now)
    }

    // ── Goal ────────────────────────────────────────────────────────

    /// Add a manual deposit toward the goal. Returns the new accumulated amount.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, CoreError> {
        let accumulated = self.goal_service.deposit(&mut self.store.goal, amount)?;
        self.dirty = true;
        Ok(accumulated)
    }

    /// Clear the accumulated amount and streak, keeping target and deadline.
    pub fn reset_goal(&mut self) {
        self.goal_service.reset(&mut self.store.goal);
        self.dirty = true;
    }

    /// Change the goal's target amount and deadline.
    pub fn update_goal(&mut self, target_amount: f64, target_date: NaiveDate) {
        self.goal_service
            .update(&mut self.store.goal, target_amount, target_date);
        self.dirty = true;
    }

    #[must_use]
    pub fn goal_progress_pct(&self) -> f64 {
        let goal = &self.store.goal;
        self.goal_service.progress_pct(goal.accumulated, goal.target())
    }

    #[must_use]
    pub fn remaining_to_goal(&self) -> f64 {
        let goal = &self.store.goal;
        self.goal_service.remaining(goal.accumulated, goal.target())
    }

    #[must_use]
    pub fn days_remaining(&self, now: NaiveDateTime) -> i64 {
        self.goal_service
            .days_remaining(self.store.goal.target_date, now)
    }

    #[must_use]
    pub fn months_remaining(&self, now: NaiveDateTime) -> i64 {
        self.goal_service
            .months_remaining(self.store.goal.target_date, now)
    }

    #[must_use]
    pub fn required_monthly_savings(&self, now: NaiveDateTime) -> f64 {
        let goal = &self.store.goal;
        self.goal_service.required_monthly_savings(
            goal.accumulated,
            goal.target(),
            goal.target_date,
            now,
        )
    }

    #[must_use]
    pub fn projection(&self, now: NaiveDateTime) -> Vec<ProjectionPoint> {
        let goal = &self.store.goal;
        self.scenario_service
            .projection(goal.accumulated, goal.target(), goal.target_date, now)
    }

    #[must_use]
    pub fn milestones(&self) -> Vec<Milestone> {
        let goal = &self.store.goal;
        self.scenario_service
            .milestones(goal.accumulated, goal.target())
    }

    // ── Scenarios ───────────────────────────────────────────────────

    /// Where the savings would be at the deadline when spending
    /// `monthly_cut` less every month.
    #[must_use]
    pub fn simulate_cut(&self, monthly_cut: f64, now: NaiveDateTime) -> ScenarioOutcome {
        self.simulate(ScenarioKind::SpendingCut, monthly_cut, now)
    }

    /// Where the savings would be at the deadline when earning
    /// `monthly_extra` more every month.
    #[must_use]
    pub fn simulate_extra_income(&self, monthly_extra: f64, now: NaiveDateTime) -> ScenarioOutcome {
        self.simulate(ScenarioKind::ExtraIncome, monthly_extra, now)
    }

    // ── Messages ────────────────────────────────────────────────────

    #[must_use]
    pub fn insights(&self, now: NaiveDateTime) -> Vec<Insight> {
        self.insight_service
            .generate_insights(&self.store, now, &self.format_service)
    }

    #[must_use]
    pub fn motivational_message(&self, now: NaiveDateTime) -> MotivationalMessage {
        let goal = &self.store.goal;
        self.insight_service.motivational_message(
            goal.accumulated,
            goal.target(),
            goal.target_date,
            now,
            &self.format_service,
        )
    }

    /// Everything the dashboard shows, computed at one instant.
    #[must_use]
    pub fn dashboard_summary(&self, now: NaiveDateTime) -> DashboardSummary {
        self.analytics_service
            .dashboard_summary(&self.store, now, &self.format_service)
    }

    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        self.format_service.currency(value)
    }

    #[must_use]
    pub fn format_compact(&self, value: f64) -> String {
        self.format_service.compact(value)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn simulate(&self, kind: ScenarioKind, monthly_delta: f64, now: NaiveDateTime) -> ScenarioOutcome {
        let goal = &self.store.goal;
        let months = self.goal_service.months_remaining(goal.target_date, now);
        self.scenario_service
            .outcome(kind, goal.accumulated, goal.target(), monthly_delta, months)
    }

    fn build(store: FinanceStore, settings: Settings) -> Self {
        Self {
            store,
            format_service: FormatService::new(settings),
            record_service: RecordService::new(),
            metrics_service: MetricsService::new(),
            goal_service: GoalService::new(),
            scenario_service: ScenarioService::new(),
            insight_service: InsightService::new(),
            analytics_service: AnalyticsService::new(),
            dirty: false,
        }
    }
}
