// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::{self, BudgetStatus};
use crate::expense::ExpenseStore;
use crate::models::TopCategory;
use crate::profile::ProfileStore;
use crate::utils::{format_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Everything the insights view shows, derived fresh from both stores.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub month: String,
    pub budget: i64,
    pub spent: i64,
    pub remaining: i64,
    pub percent_spent: f64,
    pub status: BudgetStatus,
    pub status_message: &'static str,
    pub today_spending: i64,
    pub remaining_days: u32,
    pub daily_allowance: i64,
    pub top_category: Option<TopCategory>,
}

pub fn overview(expenses: &ExpenseStore, profile: &ProfileStore, today: NaiveDate) -> Overview {
    let budget_amount = profile.profile().monthly_budget;
    let spent = expenses.total_spent_on(today);
    let remaining_days = budget::remaining_days_in_month(today);
    let status = budget::budget_status(spent, budget_amount);
    Overview {
        month: today.format("%Y-%m").to_string(),
        budget: budget_amount,
        spent,
        remaining: budget_amount - spent,
        percent_spent: budget::percent_spent(spent, budget_amount),
        status,
        status_message: status.message(),
        today_spending: expenses.today_spending_on(today),
        remaining_days,
        daily_allowance: budget::daily_allowance(spent, budget_amount, remaining_days),
        top_category: expenses.top_spending_category_on(today),
    }
}

pub fn handle(expenses: &ExpenseStore, profile: &ProfileStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let o = overview(expenses, profile, Local::now().date_naive());
    if maybe_print_json(json_flag, jsonl_flag, &o)? {
        return Ok(());
    }

    let top = match &o.top_category {
        Some(t) => format!("{} ({})", t.category_name, format_currency(t.total)),
        None => "none".to_string(),
    };
    let rows = vec![
        vec!["Month".into(), o.month.clone()],
        vec!["Budget".into(), format_currency(o.budget)],
        vec!["Spent".into(), format_currency(o.spent)],
        vec!["Remaining".into(), format_currency(o.remaining)],
        vec!["Spent %".into(), format!("{:.0}%", o.percent_spent)],
        vec!["Today".into(), format_currency(o.today_spending)],
        vec!["Days left".into(), o.remaining_days.to_string()],
        vec![
            "Daily allowance".into(),
            format_currency(o.daily_allowance),
        ],
        vec!["Top category".into(), top],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    println!("Status: {} ({})", o.status.as_str(), o.status_message);
    Ok(())
}
