// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

/// Parse a user-supplied expense timestamp. Accepts a full timestamp or a
/// bare date, which lands at midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| {
        format!(
            "Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM",
            s
        )
    })?;
    Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

pub fn parse_amount(s: &str) -> Result<i64> {
    let amount: i64 = s
        .parse()
        .with_context(|| format!("Invalid amount '{}', expected a whole number", s))?;
    Ok(amount)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Indian-locale currency formatting: last three digits, then groups of
/// two (1234567 -> ₹12,34,567).
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = n - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}₹{}", sign, grouped)
}

/// "Today, 2:30 PM" / "Yesterday, 2:30 PM" / "Aug 9, 2:30 PM".
pub fn format_expense_date(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let time = date.format("%-I:%M %p");
    let today = now.date();
    if date.date() == today {
        format!("Today, {}", time)
    } else if today.pred_opt() == Some(date.date()) {
        format!("Yesterday, {}", time)
    } else {
        format!("{}, {}", date.format("%b %-d"), time)
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
