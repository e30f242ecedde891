// ═══════════════════════════════════════════════════════════════════
// Integration Tests — FinanceTracker end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, NaiveDate, NaiveDateTime};
use finance_os_core::errors::CoreError;
use finance_os_core::models::bill::BillKind;
use finance_os_core::models::expense::{CategoryFilter, ExpenseCategory};
use finance_os_core::models::income::IncomeKind;
use finance_os_core::models::insight::{InsightKind, MotivationTier};
use finance_os_core::models::settings::Settings;
use finance_os_core::models::summary::{MilestoneKind, ScenarioKind};
use finance_os_core::FinanceTracker;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn now() -> NaiveDateTime {
    d(2025, 2, 15).and_hms_opt(10, 30, 0).unwrap()
}

fn today() -> NaiveDate {
    now().date()
}

/// A month of typical activity: salary and a side job, rent, a couple of
/// frivolous purchases, two bills and some savings.
fn populated() -> FinanceTracker {
    let mut t = FinanceTracker::create_new(today());
    t.update_goal(10_000.0, today() + Duration::days(29));
    t.add_income(IncomeKind::Salary, 4500.0, "Main job", d(2025, 2, 5), true)
        .unwrap();
    t.add_income(IncomeKind::Freelance, 800.0, "Logo", d(2025, 2, 12), false)
        .unwrap();
    t.add_income(IncomeKind::Salary, 4500.0, "Main job", d(2025, 1, 5), true)
        .unwrap();
    t.add_expense(ExpenseCategory::Essential, 1200.0, "Rent", d(2025, 2, 3))
        .unwrap();
    t.add_expense(ExpenseCategory::Frivolous, 95.0, "Delivery", d(2025, 2, 11))
        .unwrap();
    t.add_expense(ExpenseCategory::Frivolous, 45.0, "Snacks", d(2025, 2, 14))
        .unwrap();
    t.add_bill(BillKind::Card, "Card", 1450.0, 1, today() + Duration::days(2))
        .unwrap();
    t.add_bill(BillKind::Installment, "Notebook", 2400.0, 10, today() + Duration::days(10))
        .unwrap();
    t.deposit(1850.0).unwrap();
    t
}

// ═══════════════════════════════════════════════════════════════════
// Facade lifecycle
// ═══════════════════════════════════════════════════════════════════

mod lifecycle {
    use super::*;

    #[test]
    fn new_tracker_is_clean() {
        let t = FinanceTracker::create_new(today());
        assert!(!t.has_unsaved_changes());
        assert_eq!(t.store().record_count(), 0);
        assert_eq!(t.settings(), &Settings::default());
    }

    #[test]
    fn mutations_mark_dirty_and_saving_clears() {
        let mut t = FinanceTracker::create_new(today());
        t.add_expense(ExpenseCategory::Leisure, 50.0, "Movie", today())
            .unwrap();
        assert!(t.has_unsaved_changes());
        let json = t.save_to_string().unwrap();
        assert!(!t.has_unsaved_changes());

        let reloaded = FinanceTracker::load_from_str(&json, today()).unwrap();
        assert!(!reloaded.has_unsaved_changes());
        assert_eq!(reloaded.store(), t.store());
    }

    #[test]
    fn rejected_mutation_keeps_clean_state() {
        let mut t = FinanceTracker::create_new(today());
        assert!(t.deposit(0.0).is_err());
        assert!(t.add_income(IncomeKind::Other, -5.0, "x", today(), false).is_err());
        assert!(matches!(t.remove_bill(7), Err(CoreError::RecordNotFound { .. })));
        assert!(!t.has_unsaved_changes());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("financeApp_data.json");
        let mut t = populated();
        t.save_to_file(&path).unwrap();
        assert!(!t.has_unsaved_changes());

        let loaded = FinanceTracker::load_from_file(&path, today()).unwrap();
        assert_eq!(loaded.store(), t.store());
        assert_eq!(loaded.dashboard_summary(now()), t.dashboard_summary(now()));
    }

    #[test]
    fn debug_shows_counts() {
        let t = populated();
        let debug = format!("{t:?}");
        assert!(debug.contains("FinanceTracker"));
        assert!(debug.contains("incomes: 3"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    #[test]
    fn monthly_figures() {
        let t = populated();
        assert_eq!(t.monthly_income(now()), 5300.0);
        assert_eq!(t.month_expenses(now()), 1340.0);
        assert_eq!(t.available_balance(now()), 3960.0);
        assert_eq!(t.total_income_all_time(), 9800.0);
        assert_eq!(t.frivolous_total(now()), 140.0);
    }

    #[test]
    fn summary_matches_individual_queries() {
        let t = populated();
        let s = t.dashboard_summary(now());
        assert_eq!(s.as_of, now());
        assert_eq!(s.monthly_income, t.monthly_income(now()));
        assert_eq!(s.month_expenses, t.month_expenses(now()));
        assert_eq!(s.available_balance, t.available_balance(now()));
        assert_eq!(s.frivolous_total, 140.0);
        assert_eq!(s.categories, t.expenses_by_category(2, 2025));
        assert_eq!(s.target, 10_000.0);
        assert_eq!(s.accumulated, 1850.0);
        assert!((s.progress_pct - 18.5).abs() < 1e-9);
        assert_eq!(s.remaining, 8150.0);
        assert_eq!(s.days_remaining, 30);
        assert_eq!(s.months_remaining, 1);
        assert_eq!(s.required_monthly, 8150.0);
        assert_eq!(s.streak, 1);
        assert_eq!(s.next_bill.as_ref().map(|b| b.description.as_str()), Some("Card"));
        assert_eq!(s.urgent_bill_count, 1);
        assert!((s.pending_bills_total - 1690.0).abs() < 1e-9);
        assert_eq!(s.insights, t.insights(now()));
        assert_eq!(s.motivation, t.motivational_message(now()));
    }

    #[test]
    fn insights_for_a_typical_month() {
        let mut t = populated();
        let kinds: Vec<InsightKind> = t.insights(now()).iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InsightKind::BehindPlan, InsightKind::BillsDueSoon]);

        t.add_expense(ExpenseCategory::Frivolous, 20.0, "Candy", today())
            .unwrap();
        let kinds: Vec<InsightKind> = t.insights(now()).iter().map(|i| i.kind).collect();
        assert_eq!(kinds.first(), Some(&InsightKind::FrivolousSpending));
        assert_eq!(t.store().goal.streak, 0);
    }

    #[test]
    fn paying_the_urgent_bill_silences_the_alert() {
        let mut t = populated();
        let card_id = t.upcoming_bills()[0].id;
        assert!(t.toggle_bill_paid(card_id).unwrap());
        assert!(t.urgent_bills(now()).is_empty());
        assert_eq!(t.paid_bills().len(), 1);
        assert!(!t
            .insights(now())
            .iter()
            .any(|i| i.kind == InsightKind::BillsDueSoon));
    }

    #[test]
    fn income_override_changes_the_plan() {
        let mut t = populated();
        t.set_monthly_income(12_000.0).unwrap();
        assert_eq!(t.monthly_income(now()), 12_000.0);
        let kinds: Vec<InsightKind> = t.insights(now()).iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&InsightKind::AheadOfPlan));
        assert!(!kinds.contains(&InsightKind::BehindPlan));
    }

    #[test]
    fn expenses_filtered_newest_first() {
        let t = populated();
        let all: Vec<&str> = t
            .expenses(CategoryFilter::All)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(all, vec!["Snacks", "Delivery", "Rent"]);
        let frivolous = t.expenses(CategoryFilter::Only(ExpenseCategory::Frivolous));
        assert_eq!(frivolous.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Goal journey
// ═══════════════════════════════════════════════════════════════════

mod goal_journey {
    use super::*;

    #[test]
    fn deposits_walk_through_motivation_tiers() {
        let mut t = FinanceTracker::create_new(today());
        t.update_goal(10_000.0, d(2026, 2, 15));
        assert_eq!(t.motivational_message(now()).tier, MotivationTier::JustStarting);

        t.deposit(2500.0).unwrap();
        assert_eq!(t.motivational_message(now()).tier, MotivationTier::GoodStart);

        t.deposit(2500.0).unwrap();
        assert_eq!(t.goal_progress_pct(), 50.0);
        assert_eq!(t.motivational_message(now()).tier, MotivationTier::Halfway);

        t.deposit(2500.0).unwrap();
        assert_eq!(t.motivational_message(now()).tier, MotivationTier::AlmostThere);

        assert_eq!(t.deposit(5000.0).unwrap(), 10_000.0);
        assert_eq!(t.motivational_message(now()).tier, MotivationTier::GoalReached);
        assert_eq!(t.remaining_to_goal(), 0.0);
        assert!(t
            .insights(now())
            .iter()
            .any(|i| i.kind == InsightKind::GoalReached));
        assert!(t.milestones().iter().all(|m| m.reached));
    }

    #[test]
    fn reset_starts_over() {
        let mut t = populated();
        t.reset_goal();
        assert_eq!(t.store().goal.accumulated, 0.0);
        assert_eq!(t.store().goal.streak, 0);
        let reached: Vec<MilestoneKind> = t
            .milestones()
            .iter()
            .filter(|m| m.reached)
            .map(|m| m.kind)
            .collect();
        assert_eq!(reached, vec![MilestoneKind::Start]);
    }

    #[test]
    fn projection_and_scenarios() {
        let mut t = populated();
        t.update_goal(10_000.0, d(2026, 2, 14));
        let months = t.months_remaining(now());
        assert_eq!(months, 13);
        assert_eq!(t.projection(now()).len(), 14);

        let cut = t.simulate_cut(500.0, now());
        assert_eq!(cut.kind, ScenarioKind::SpendingCut);
        assert_eq!(cut.projected, 1850.0 + 500.0 * 13.0);
        assert!(!cut.reaches_goal);

        let extra = t.simulate_extra_income(2000.0, now());
        assert_eq!(extra.projected, 15_000.0);
        assert!(extra.reaches_goal);
        assert_eq!(extra.progress_pct, 100.0);
    }

    #[test]
    fn formatting_follows_settings() {
        let mut t = populated();
        assert_eq!(t.format_currency(8150.0), "R$\u{a0}8.150,00");
        t.set_settings(Settings {
            currency_symbol: "€".into(),
            thousands_separator: ' ',
            decimal_separator: ',',
        });
        assert_eq!(t.format_currency(8150.0), "€\u{a0}8 150,00");
        assert_eq!(t.format_compact(8400.0), "€\u{a0}8.4k");
    }
}
