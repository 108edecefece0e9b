// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::expense::ExpenseStore;
use anyhow::Result;
use serde_json::json;

pub fn handle(expenses: &ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(expenses, sub),
        _ => Ok(()),
    }
}

fn export_expenses(expenses: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "title",
                "category_id",
                "category_name",
                "amount",
                "created_at",
            ])?;
            for e in expenses.expenses() {
                wtr.write_record([
                    e.id.clone(),
                    e.date.format("%Y-%m-%d %H:%M:%S").to_string(),
                    e.title.clone(),
                    e.category_id.clone(),
                    e.category_name.clone(),
                    e.amount.to_string(),
                    e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = expenses
                .expenses()
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id, "date": e.date, "title": e.title,
                        "category_id": e.category_id, "category_name": e.category_name,
                        "category_icon": e.category_icon, "amount": e.amount,
                        "created_at": e.created_at,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
