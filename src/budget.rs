// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Four-level classification of spent-to-budget ratio. A zero budget maps
/// to Good rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Excellent,
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn message(&self) -> &'static str {
        match self {
            BudgetStatus::Excellent => "You're managing your budget well.",
            BudgetStatus::Good => "You're on track, but be mindful.",
            BudgetStatus::Warning => "You're close to your budget limit.",
            BudgetStatus::Exceeded => "You've exceeded your budget.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Excellent => "excellent",
            BudgetStatus::Good => "good",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Exceeded => "exceeded",
        }
    }
}

pub fn budget_status(spent: i64, budget: i64) -> BudgetStatus {
    if budget == 0 {
        return BudgetStatus::Good;
    }
    let percentage = spent as f64 / budget as f64 * 100.0;
    if percentage <= 50.0 {
        BudgetStatus::Excellent
    } else if percentage <= 80.0 {
        BudgetStatus::Good
    } else if percentage <= 100.0 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Exceeded
    }
}

pub fn is_over_budget(spent: i64, budget: i64) -> bool {
    spent > budget
}

/// Percent of budget spent, clamped to 0..=100. Zero budget yields 0.
pub fn percent_spent(spent: i64, budget: i64) -> f64 {
    if budget <= 0 {
        return 0.0;
    }
    (spent as f64 / budget as f64 * 100.0).clamp(0.0, 100.0)
}

/// What can still be spent per day through month end without going over.
pub fn daily_allowance(spent: i64, budget: i64, remaining_days: u32) -> i64 {
    if remaining_days == 0 {
        return 0;
    }
    let remaining_budget = (budget - spent).max(0);
    remaining_budget / remaining_days as i64
}

/// Days left in today's month, counting today itself.
pub fn remaining_days_in_month(today: NaiveDate) -> u32 {
    last_day_of_month(today.year(), today.month()) - today.day() + 1
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month out of range"),
    }
}

/// Pre-add check: would recording `amount` push the month over budget?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetCheck {
    pub will_exceed: bool,
    pub exceed_amount: i64,
}

pub fn check_expense(spent: i64, budget: i64, amount: i64) -> BudgetCheck {
    let will_exceed = spent + amount > budget;
    BudgetCheck {
        will_exceed,
        exceed_amount: if will_exceed { spent + amount - budget } else { 0 },
    }
}
