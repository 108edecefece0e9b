// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendwise::utils::{format_currency, format_expense_date, parse_datetime};

#[test]
fn currency_uses_indian_grouping() {
    assert_eq!(format_currency(0), "₹0");
    assert_eq!(format_currency(999), "₹999");
    assert_eq!(format_currency(1000), "₹1,000");
    assert_eq!(format_currency(100000), "₹1,00,000");
    assert_eq!(format_currency(1234567), "₹12,34,567");
    assert_eq!(format_currency(-4500), "-₹4,500");
}

#[test]
fn expense_date_relative_labels() {
    let now = NaiveDate::from_ymd_opt(2025, 8, 15)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 8, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let yesterday = NaiveDate::from_ymd_opt(2025, 8, 14)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();
    let older = NaiveDate::from_ymd_opt(2025, 8, 2)
        .unwrap()
        .and_hms_opt(23, 45, 0)
        .unwrap();

    assert_eq!(format_expense_date(today, now), "Today, 2:30 PM");
    assert_eq!(format_expense_date(yesterday, now), "Yesterday, 9:05 AM");
    assert_eq!(format_expense_date(older, now), "Aug 2, 11:45 PM");
}

#[test]
fn datetime_parsing_accepts_date_or_timestamp() {
    let midnight = parse_datetime("2025-08-15").unwrap();
    assert_eq!(midnight.format("%H:%M").to_string(), "00:00");

    let with_time = parse_datetime("2025-08-15 14:30").unwrap();
    assert_eq!(with_time.format("%H:%M").to_string(), "14:30");

    assert!(parse_datetime("15/08/2025").is_err());
}
