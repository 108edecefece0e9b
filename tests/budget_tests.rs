// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendwise::budget::{
    BudgetStatus, budget_status, check_expense, daily_allowance, is_over_budget, percent_spent,
    remaining_days_in_month,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn status_boundaries() {
    assert_eq!(budget_status(0, 1000), BudgetStatus::Excellent);
    assert_eq!(budget_status(500, 1000), BudgetStatus::Excellent);
    assert_eq!(budget_status(501, 1000), BudgetStatus::Good);
    assert_eq!(budget_status(800, 1000), BudgetStatus::Good);
    assert_eq!(budget_status(801, 1000), BudgetStatus::Warning);
    assert_eq!(budget_status(1000, 1000), BudgetStatus::Warning);
    assert_eq!(budget_status(1001, 1000), BudgetStatus::Exceeded);
}

#[test]
fn zero_budget_is_good_not_a_division_error() {
    assert_eq!(budget_status(0, 0), BudgetStatus::Good);
    assert_eq!(budget_status(5000, 0), BudgetStatus::Good);
    assert_eq!(percent_spent(5000, 0), 0.0);
}

#[test]
fn status_messages() {
    assert_eq!(
        BudgetStatus::Exceeded.message(),
        "You've exceeded your budget."
    );
    assert_eq!(BudgetStatus::Excellent.as_str(), "excellent");
}

#[test]
fn percent_spent_clamps_to_100() {
    assert_eq!(percent_spent(500, 1000), 50.0);
    assert_eq!(percent_spent(2000, 1000), 100.0);
    assert_eq!(percent_spent(0, 1000), 0.0);
}

#[test]
fn over_budget_is_strict_comparison() {
    assert!(!is_over_budget(1000, 1000));
    assert!(is_over_budget(1001, 1000));
}

#[test]
fn daily_allowance_floors_and_guards() {
    // 1000 left over 3 days floors to 333.
    assert_eq!(daily_allowance(7000, 8000, 3), 333);
    assert_eq!(daily_allowance(7000, 8000, 10), 100);
    // Overspent months allow nothing.
    assert_eq!(daily_allowance(9000, 8000, 10), 0);
    // No remaining days never divides by zero.
    assert_eq!(daily_allowance(0, 8000, 0), 0);
}

#[test]
fn remaining_days_is_inclusive_of_today() {
    // 30-day month.
    assert_eq!(remaining_days_in_month(d(2025, 9, 30)), 1);
    assert_eq!(remaining_days_in_month(d(2025, 9, 1)), 30);
    // 31-day month.
    assert_eq!(remaining_days_in_month(d(2025, 8, 15)), 17);
    // February, leap and non-leap.
    assert_eq!(remaining_days_in_month(d(2024, 2, 1)), 29);
    assert_eq!(remaining_days_in_month(d(2025, 2, 1)), 28);
}

#[test]
fn check_expense_reports_exceed_amount() {
    let check = check_expense(7000, 8000, 1500);
    assert!(check.will_exceed);
    assert_eq!(check.exceed_amount, 500);

    let ok = check_expense(7000, 8000, 1000);
    assert!(!ok.will_exceed);
    assert_eq!(ok.exceed_amount, 0);
}
