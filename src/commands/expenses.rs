// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget;
use crate::expense::{DEFAULT_RECENT_LIMIT, ExpenseStore};
use crate::kv::KeyValueStore;
use crate::models::{ExpenseUpdate, NewExpense};
use crate::profile::ProfileStore;
use crate::utils::{
    format_currency, format_expense_date, maybe_print_json, parse_amount, parse_datetime,
    pretty_table,
};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

pub fn handle(
    kv: &dyn KeyValueStore,
    expenses: &mut ExpenseStore,
    profile: &ProfileStore,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(kv, expenses, profile, sub)?,
        Some(("list", sub)) => list(expenses, sub)?,
        Some(("recent", sub)) => recent(expenses, sub)?,
        Some(("edit", sub)) => edit(kv, expenses, profile, sub)?,
        Some(("remove", sub)) => remove(kv, expenses, sub)?,
        Some(("clear", sub)) => clear(kv, expenses, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(
    kv: &dyn KeyValueStore,
    expenses: &mut ExpenseStore,
    profile: &ProfileStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap();
    let category = profile
        .category(category_id)
        .with_context(|| format!("Category '{}' is not in your selected set", category_id))?
        .clone();
    let title = sub
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_datetime(s)?,
        None => Local::now().naive_local(),
    };

    // The store itself only validates the amount; the budget warning is
    // this layer's job, mirroring the app's pre-save confirmation.
    let check = budget::check_expense(
        expenses.total_spent(),
        profile.profile().monthly_budget,
        amount,
    );
    if check.will_exceed {
        eprintln!(
            "Warning: this expense puts you {} over your monthly budget",
            format_currency(check.exceed_amount)
        );
    }

    let expense = expenses.add(
        kv,
        NewExpense {
            amount,
            title,
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            category_icon: category.icon.clone(),
            date,
        },
    )?;
    println!(
        "Recorded {} for '{}' in {} ({})",
        format_currency(expense.amount),
        expense.title,
        category.name,
        expense.id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub category: String,
    pub amount: i64,
}

/// Rows for `expense list`, in collection order (newest-first): optional
/// all-time category filter, then an optional length cap.
pub fn list_rows(expenses: &ExpenseStore, sub: &clap::ArgMatches) -> Vec<ExpenseRow> {
    let filtered: Vec<_> = match sub.get_one::<String>("category") {
        Some(cat) => expenses.by_category(cat),
        None => expenses.expenses().iter().collect(),
    };
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(filtered.len());
    filtered
        .into_iter()
        .take(limit)
        .map(|e| ExpenseRow {
            id: e.id.clone(),
            date: e.date.format("%Y-%m-%d %H:%M").to_string(),
            title: e.title.clone(),
            category: e.category_name.clone(),
            amount: e.amount,
        })
        .collect()
}

fn list(expenses: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = list_rows(expenses, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.title.clone(),
                    r.category.clone(),
                    format_currency(r.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Title", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn recent(expenses: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(DEFAULT_RECENT_LIMIT);
    let recent = expenses.recent(limit);
    if maybe_print_json(json_flag, jsonl_flag, &recent)? {
        return Ok(());
    }
    let now = Local::now().naive_local();
    let rows: Vec<Vec<String>> = recent
        .iter()
        .map(|e| {
            vec![
                e.title.clone(),
                e.category_name.clone(),
                format_expense_date(e.date, now),
                format_currency(e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Title", "Category", "When", "Amount"], rows)
    );
    Ok(())
}

fn edit(
    kv: &dyn KeyValueStore,
    expenses: &mut ExpenseStore,
    profile: &ProfileStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut updates = ExpenseUpdate::default();
    if let Some(s) = sub.get_one::<String>("amount") {
        updates.amount = Some(parse_amount(s)?);
    }
    if let Some(title) = sub.get_one::<String>("title") {
        updates.title = Some(title.clone());
    }
    if let Some(cat_id) = sub.get_one::<String>("category") {
        // Re-denormalize the display snapshot from the live set.
        let category = profile
            .category(cat_id)
            .with_context(|| format!("Category '{}' is not in your selected set", cat_id))?;
        updates.category_id = Some(category.id.clone());
        updates.category_name = Some(category.name.clone());
        updates.category_icon = Some(category.icon.clone());
    }
    if let Some(s) = sub.get_one::<String>("date") {
        updates.date = Some(parse_datetime(s)?);
    }
    if expenses.update(kv, id, updates)? {
        println!("Updated {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

fn remove(kv: &dyn KeyValueStore, expenses: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if expenses.remove(kv, id)? {
        println!("Removed {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

fn clear(kv: &dyn KeyValueStore, expenses: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        eprintln!("This deletes every recorded expense; pass --yes to confirm");
        return Ok(());
    }
    let n = expenses.expenses().len();
    expenses.clear(kv)?;
    println!("Cleared {} expense(s)", n);
    Ok(())
}
