// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use spendwise::commands::{expenses, insights, profile as profile_cmd};
use spendwise::expense::ExpenseStore;
use spendwise::kv::MemoryKv;
use spendwise::models::NewExpense;
use spendwise::profile::ProfileStore;
use spendwise::{budget, cli};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn setup() -> (MemoryKv, ExpenseStore) {
    let kv = MemoryKv::new();
    let mut store = ExpenseStore::load(&kv);
    for i in 1..=3 {
        store
            .add(
                &kv,
                NewExpense {
                    amount: i * 100,
                    title: format!("e{}", i),
                    category_id: "snacks".into(),
                    category_name: "Snacks".into(),
                    category_icon: "Cookie".into(),
                    date: dt(2025, 8, i as u32),
                },
            )
            .unwrap();
    }
    (kv, store)
}

#[test]
fn list_limit_respected() {
    let (_kv, store) = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendwise", "expense", "list", "--limit", "2"]);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = exp_m.subcommand() {
            let rows = expenses::list_rows(&store, list_m);
            assert_eq!(rows.len(), 2);
            // Collection order is newest-first.
            assert_eq!(rows[0].title, "e3");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no expense subcommand");
    }
}

#[test]
fn list_category_filter_applied() {
    let (kv, mut store) = setup();
    store
        .add(
            &kv,
            NewExpense {
                amount: 999,
                title: "thali".into(),
                category_id: "mess".into(),
                category_name: "Mess".into(),
                category_icon: "Soup".into(),
                date: dt(2025, 8, 9),
            },
        )
        .unwrap();
    let matches = cli::build_cli().get_matches_from([
        "spendwise", "expense", "list", "--category", "snacks",
    ]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = exp_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = expenses::list_rows(&store, list_m);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.category == "Snacks"));
}

#[test]
fn category_spec_parsing() {
    let cats = profile_cmd::parse_category_spec("gym:Gym:Dumbbell, books:Books:Book").unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].id, "gym");
    assert_eq!(cats[1].name, "Books");

    assert!(profile_cmd::parse_category_spec("gym:Gym").is_err());
    assert!(profile_cmd::parse_category_spec(":Name:Icon").is_err());
}

#[test]
fn insights_overview_composes_both_stores() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    let (kv, store) = setup(); // 600 spent in August
    let mut profile = ProfileStore::load(&kv);
    profile.set_monthly_budget(&kv, 1000).unwrap();

    let o = insights::overview(&store, &profile, today);
    assert_eq!(o.spent, 600);
    assert_eq!(o.budget, 1000);
    assert_eq!(o.remaining, 400);
    assert_eq!(o.status, budget::BudgetStatus::Good);
    assert_eq!(o.remaining_days, 17);
    assert_eq!(o.daily_allowance, 400 / 17);
    assert_eq!(o.top_category.as_ref().unwrap().category_id, "snacks");
    assert_eq!(o.top_category.as_ref().unwrap().total, 600);
}

#[test]
fn will_exceed_scenario_from_both_stores() {
    let kv = MemoryKv::new();
    let mut store = ExpenseStore::load(&kv);
    store
        .add(
            &kv,
            NewExpense {
                amount: 7000,
                title: "rent".into(),
                category_id: "hostel-rent".into(),
                category_name: "Hostel Rent".into(),
                category_icon: "Building2".into(),
                date: dt(2025, 8, 1),
            },
        )
        .unwrap();
    let mut profile = ProfileStore::load(&kv);
    profile.set_monthly_budget(&kv, 8000).unwrap();

    let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    let check = budget::check_expense(
        store.total_spent_on(today),
        profile.profile().monthly_budget,
        1500,
    );
    assert!(check.will_exceed);
    assert_eq!(check.exceed_amount, 500);
}
