use chrono::NaiveDate;
use finance_os_core::constants::DEFAULT_GOAL_TARGET;
use finance_os_core::models::bill::{Bill, BillKind};
use finance_os_core::models::expense::{CategoryFilter, Expense, ExpenseCategory};
use finance_os_core::models::goal::Goal;
use finance_os_core::models::income::{IncomeEntry, IncomeKind};
use finance_os_core::models::insight::{Insight, InsightKind, Severity};
use finance_os_core::models::settings::Settings;
use finance_os_core::models::store::FinanceStore;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Enums & persisted labels
// ═══════════════════════════════════════════════════════════════════

mod labels {
    use super::*;

    #[test]
    fn income_kind_serializes_with_stored_labels() {
        assert_eq!(serde_json::to_string(&IncomeKind::Salary).unwrap(), "\"Salário\"");
        assert_eq!(serde_json::to_string(&IncomeKind::ExtraIncome).unwrap(), "\"Renda extra\"");
        assert_eq!(serde_json::to_string(&IncomeKind::Freelance).unwrap(), "\"Freelance\"");
        assert_eq!(serde_json::to_string(&IncomeKind::Investment).unwrap(), "\"Investimento\"");
        assert_eq!(serde_json::to_string(&IncomeKind::Other).unwrap(), "\"Outro\"");
    }

    #[test]
    fn expense_category_serializes_with_stored_labels() {
        assert_eq!(serde_json::to_string(&ExpenseCategory::Essential).unwrap(), "\"Essenciais\"");
        assert_eq!(serde_json::to_string(&ExpenseCategory::Investment).unwrap(), "\"Investimentos\"");
        assert_eq!(serde_json::to_string(&ExpenseCategory::Leisure).unwrap(), "\"Lazer\"");
        assert_eq!(serde_json::to_string(&ExpenseCategory::Frivolous).unwrap(), "\"Bobagens\"");
    }

    #[test]
    fn bill_kind_serializes_with_stored_labels() {
        assert_eq!(serde_json::to_string(&BillKind::Card).unwrap(), "\"Cartão\"");
        assert_eq!(serde_json::to_string(&BillKind::Invoice).unwrap(), "\"Boleto\"");
        assert_eq!(serde_json::to_string(&BillKind::Installment).unwrap(), "\"Parcelamento\"");
    }

    #[test]
    fn display_uses_english_names() {
        assert_eq!(IncomeKind::ExtraIncome.to_string(), "Extra income");
        assert_eq!(ExpenseCategory::Frivolous.to_string(), "Frivolous");
        assert_eq!(BillKind::Invoice.to_string(), "Invoice");
    }

    #[test]
    fn category_order_is_fixed() {
        assert_eq!(
            ExpenseCategory::ALL,
            [
                ExpenseCategory::Essential,
                ExpenseCategory::Investment,
                ExpenseCategory::Leisure,
                ExpenseCategory::Frivolous,
            ]
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = serde_json::from_str::<ExpenseCategory>("\"Mercado\"");
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Records
// ═══════════════════════════════════════════════════════════════════

mod records {
    use super::*;

    #[test]
    fn income_entry_reads_stored_shape() {
        let json = r#"{"id":1,"tipo":"Salário","valor":4500,"data":"2025-01-05","recorrente":true,"descricao":"Salário principal"}"#;
        let entry: IncomeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.kind, IncomeKind::Salary);
        assert_eq!(entry.amount, 4500.0);
        assert_eq!(entry.date, d(2025, 1, 5));
        assert!(entry.recurring);
        assert_eq!(entry.description, "Salário principal");
    }

    #[test]
    fn income_entry_ignores_extra_form_fields() {
        let json = r#"{"id":1739600000000,"tipo":"Freelance","valor":800,"data":"2025-02-12","recorrente":false,"descricao":"Logo","extra":"x"}"#;
        let entry: IncomeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 1_739_600_000_000);
    }

    #[test]
    fn null_amount_reads_as_zero() {
        let json = r#"{"id":3,"categoria":"Lazer","valor":null,"data":"2025-02-10","descricao":"Cinema"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn expense_is_frivolous() {
        let e = Expense::new(1, ExpenseCategory::Frivolous, 20.0, "Snack", d(2025, 2, 1));
        assert!(e.is_frivolous());
        let e = Expense::new(2, ExpenseCategory::Leisure, 20.0, "Movie", d(2025, 2, 1));
        assert!(!e.is_frivolous());
    }

    #[test]
    fn bill_installment_amount_is_derived() {
        let bill = Bill::new(1, BillKind::Installment, "Notebook 10x", 2400.0, 10, d(2025, 2, 28));
        assert_eq!(bill.installment_amount(), 240.0);
        assert_eq!(bill.current_installment, 1);
        assert!(!bill.paid);
    }

    #[test]
    fn bill_with_zero_installments_counts_as_one() {
        let mut bill = Bill::new(1, BillKind::Card, "Card", 1450.0, 1, d(2025, 2, 20));
        bill.installment_count = 0;
        assert_eq!(bill.installment_amount(), 1450.0);
    }

    #[test]
    fn bill_defaults_installments_when_missing() {
        let json = r#"{"id":2,"tipo":"Boleto","descricao":"Internet","valor":99.9,"vencimento":"2025-02-25","pago":false}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.installment_count, 1);
        assert_eq!(bill.current_installment, 1);
        assert_eq!(bill.kind, BillKind::Invoice);
    }

    #[test]
    fn category_filter_matches() {
        assert!(CategoryFilter::All.matches(ExpenseCategory::Leisure));
        assert!(CategoryFilter::Only(ExpenseCategory::Leisure).matches(ExpenseCategory::Leisure));
        assert!(!CategoryFilter::Only(ExpenseCategory::Leisure).matches(ExpenseCategory::Essential));
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Goal
// ═══════════════════════════════════════════════════════════════════

mod goal {
    use super::*;

    #[test]
    fn new_goal_has_default_target_and_one_year_deadline() {
        let goal = Goal::new(d(2025, 3, 10));
        assert_eq!(goal.target(), DEFAULT_GOAL_TARGET);
        assert_eq!(goal.target_date, d(2026, 3, 10));
        assert_eq!(goal.accumulated, 0.0);
        assert_eq!(goal.streak, 0);
        assert!(goal.target_amount.is_none());
    }

    #[test]
    fn leap_day_deadline_clamps_to_end_of_february() {
        let goal = Goal::new(d(2024, 2, 29));
        assert_eq!(goal.target_date, d(2025, 2, 28));
    }

    #[test]
    fn non_positive_target_falls_back_to_default() {
        let mut goal = Goal::new(d(2025, 1, 1));
        goal.target_amount = Some(0.0);
        assert_eq!(goal.target(), DEFAULT_GOAL_TARGET);
        goal.target_amount = Some(-5.0);
        assert_eq!(goal.target(), DEFAULT_GOAL_TARGET);
        goal.target_amount = Some(25_000.0);
        assert_eq!(goal.target(), 25_000.0);
    }

    #[test]
    fn is_reached() {
        let mut goal = Goal::new(d(2025, 1, 1));
        goal.accumulated = 9_999.99;
        assert!(!goal.is_reached());
        goal.accumulated = 10_000.0;
        assert!(goal.is_reached());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Store
// ═══════════════════════════════════════════════════════════════════

mod store {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = FinanceStore::new(d(2025, 1, 1));
        assert!(store.incomes.is_empty());
        assert!(store.expenses.is_empty());
        assert!(store.bills.is_empty());
        assert_eq!(store.income_override(), None);
        assert_eq!(store.record_count(), 0);
    }

    #[test]
    fn next_id_starts_at_one() {
        let store = FinanceStore::new(d(2025, 1, 1));
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn next_id_is_unique_across_lists() {
        let mut store = FinanceStore::new(d(2025, 1, 1));
        store.incomes.push(IncomeEntry::new(5, IncomeKind::Salary, 1.0, "a", d(2025, 1, 1), false));
        store.expenses.push(Expense::new(9, ExpenseCategory::Leisure, 1.0, "b", d(2025, 1, 1)));
        store.bills.push(Bill::new(7, BillKind::Card, "c", 1.0, 1, d(2025, 1, 1)));
        assert_eq!(store.next_id(), 10);
    }

    #[test]
    fn income_override_only_when_positive() {
        let mut store = FinanceStore::new(d(2025, 1, 1));
        store.monthly_income_override = 0.0;
        assert_eq!(store.income_override(), None);
        store.monthly_income_override = -100.0;
        assert_eq!(store.income_override(), None);
        store.monthly_income_override = 5200.0;
        assert_eq!(store.income_override(), Some(5200.0));
    }

    #[test]
    fn serializes_flat_goal_fields() {
        let mut store = FinanceStore::new(d(2025, 1, 1));
        store.goal.accumulated = 1850.0;
        store.goal.streak = 3;
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["metaAtual"], 1850.0);
        assert_eq!(value["streak"], 3);
        assert_eq!(value["metaDate"], "2026-01-01");
        assert!(value.get("metaGoal").is_none());
        assert!(value["entradas"].is_array());
        assert!(value["gastos"].is_array());
        assert!(value["contas"].is_array());
        assert_eq!(value["rendaMensal"], 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Insight & Settings
// ═══════════════════════════════════════════════════════════════════

mod insight {
    use super::*;

    #[test]
    fn new_fills_icon_and_severity_from_kind() {
        let insight = Insight::new(InsightKind::BillsDueSoon, "1 bill(s) due within 3 days!");
        assert_eq!(insight.icon, "🔔");
        assert_eq!(insight.severity, Severity::Urgent);
    }

    #[test]
    fn severities() {
        assert_eq!(InsightKind::FrivolousSpending.severity(), Severity::Warning);
        assert_eq!(InsightKind::BehindPlan.severity(), Severity::Warning);
        assert_eq!(InsightKind::AheadOfPlan.severity(), Severity::Positive);
        assert_eq!(InsightKind::GoalReached.severity(), Severity::Positive);
        assert_eq!(InsightKind::StreakStrong.severity(), Severity::Encouragement);
        assert_eq!(InsightKind::StreakMild.severity(), Severity::Encouragement);
    }

    #[test]
    fn default_settings_are_brazilian_real() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "R$");
        assert_eq!(s.thousands_separator, '.');
        assert_eq!(s.decimal_separator, ',');
    }
}
