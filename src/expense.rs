// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::kv::KeyValueStore;
use crate::models::{Expense, ExpenseUpdate, NewExpense, TopCategory};
use crate::snapshot;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

pub const EXPENSE_KEY: &str = "expense-storage";

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid amount {0}: must be >= 0")]
    InvalidAmount(i64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseState {
    expenses: Vec<Expense>,
}

/// Authoritative in-memory list of expense records. Mutations persist the
/// full state to the sink before returning; selectors re-scan the list on
/// every call, there is no caching to invalidate.
///
/// Records are kept newest-first (adds prepend). That is display order,
/// not a correctness invariant; selectors that need chronological order
/// sort explicitly.
pub struct ExpenseStore {
    state: ExpenseState,
}

impl ExpenseStore {
    /// Rehydrate from the sink, or start empty when the slot is missing or
    /// malformed.
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        Self {
            state: snapshot::load_or_default(kv, EXPENSE_KEY),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn find(&self, id: &str) -> Option<&Expense> {
        self.state.expenses.iter().find(|e| e.id == id)
    }

    /// Record a new expense. Rejects negative amounts; zero is accepted.
    /// A blank title falls back to the category name.
    pub fn add(&mut self, kv: &dyn KeyValueStore, input: NewExpense) -> Result<Expense> {
        if input.amount < 0 {
            return Err(StoreError::InvalidAmount(input.amount).into());
        }
        let title = if input.title.trim().is_empty() {
            input.category_name.clone()
        } else {
            input.title
        };
        let expense = Expense {
            id: generate_id(),
            amount: input.amount,
            title,
            category_id: input.category_id,
            category_name: input.category_name,
            category_icon: input.category_icon,
            date: input.date,
            created_at: Local::now().naive_local(),
        };
        self.state.expenses.insert(0, expense.clone());
        self.save(kv)?;
        Ok(expense)
    }

    /// Remove by id. Returns Ok(false) when the id is unknown; deleting
    /// twice is a no-op, not an error.
    pub fn remove(&mut self, kv: &dyn KeyValueStore, id: &str) -> Result<bool> {
        let before = self.state.expenses.len();
        self.state.expenses.retain(|e| e.id != id);
        if self.state.expenses.len() == before {
            return Ok(false);
        }
        self.save(kv)?;
        Ok(true)
    }

    /// Merge the given fields into an existing record. `id` and
    /// `created_at` are immutable. Returns Ok(false) when the id is
    /// unknown.
    pub fn update(
        &mut self,
        kv: &dyn KeyValueStore,
        id: &str,
        updates: ExpenseUpdate,
    ) -> Result<bool> {
        if let Some(amount) = updates.amount {
            if amount < 0 {
                return Err(StoreError::InvalidAmount(amount).into());
            }
        }
        let Some(expense) = self.state.expenses.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        if let Some(amount) = updates.amount {
            expense.amount = amount;
        }
        if let Some(title) = updates.title {
            expense.title = title;
        }
        if let Some(category_id) = updates.category_id {
            expense.category_id = category_id;
        }
        if let Some(category_name) = updates.category_name {
            expense.category_name = category_name;
        }
        if let Some(category_icon) = updates.category_icon {
            expense.category_icon = category_icon;
        }
        if let Some(date) = updates.date {
            expense.date = date;
        }
        self.save(kv)?;
        Ok(true)
    }

    pub fn clear(&mut self, kv: &dyn KeyValueStore) -> Result<()> {
        self.state.expenses.clear();
        self.save(kv)
    }

    /// Sum of amounts for the current calendar month.
    pub fn total_spent(&self) -> i64 {
        self.total_spent_on(Local::now().date_naive())
    }

    pub fn total_spent_on(&self, today: NaiveDate) -> i64 {
        self.state
            .expenses
            .iter()
            .filter(|e| in_month(e, today))
            .map(|e| e.amount)
            .sum()
    }

    /// All records for a category, all time, in collection order.
    pub fn by_category(&self, category_id: &str) -> Vec<&Expense> {
        self.state
            .expenses
            .iter()
            .filter(|e| e.category_id == category_id)
            .collect()
    }

    pub fn category_total(&self, category_id: &str) -> i64 {
        self.category_total_on(category_id, Local::now().date_naive())
    }

    pub fn category_total_on(&self, category_id: &str, today: NaiveDate) -> i64 {
        self.state
            .expenses
            .iter()
            .filter(|e| e.category_id == category_id && in_month(e, today))
            .map(|e| e.amount)
            .sum()
    }

    pub fn category_expense_count(&self, category_id: &str) -> usize {
        self.category_expense_count_on(category_id, Local::now().date_naive())
    }

    pub fn category_expense_count_on(&self, category_id: &str, today: NaiveDate) -> usize {
        self.state
            .expenses
            .iter()
            .filter(|e| e.category_id == category_id && in_month(e, today))
            .count()
    }

    /// Most recently created records, `created_at` descending. The sort is
    /// stable so ties keep collection order.
    pub fn recent(&self, limit: usize) -> Vec<&Expense> {
        let mut all: Vec<&Expense> = self.state.expenses.iter().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        all
    }

    /// Sum of amounts whose `date` falls on the same calendar day as today.
    pub fn today_spending(&self) -> i64 {
        self.today_spending_on(Local::now().date_naive())
    }

    pub fn today_spending_on(&self, today: NaiveDate) -> i64 {
        self.state
            .expenses
            .iter()
            .filter(|e| e.date.date() == today)
            .map(|e| e.amount)
            .sum()
    }

    /// Highest-spend category of the current month, or None when the month
    /// has no records. Equal totals resolve to the smallest category id.
    pub fn top_spending_category(&self) -> Option<TopCategory> {
        self.top_spending_category_on(Local::now().date_naive())
    }

    pub fn top_spending_category_on(&self, today: NaiveDate) -> Option<TopCategory> {
        let mut groups: BTreeMap<&str, TopCategory> = BTreeMap::new();
        for e in self.state.expenses.iter().filter(|e| in_month(e, today)) {
            groups
                .entry(e.category_id.as_str())
                .or_insert_with(|| TopCategory {
                    category_id: e.category_id.clone(),
                    category_name: e.category_name.clone(),
                    category_icon: e.category_icon.clone(),
                    total: 0,
                })
                .total += e.amount;
        }
        // BTreeMap iteration is ordered by id, so with a strict comparison
        // the smallest id wins ties.
        let mut top: Option<TopCategory> = None;
        for cat in groups.into_values() {
            match &top {
                Some(best) if cat.total <= best.total => {}
                _ => top = Some(cat),
            }
        }
        top
    }

    fn save(&self, kv: &dyn KeyValueStore) -> Result<()> {
        snapshot::save(kv, EXPENSE_KEY, &self.state)
    }
}

fn in_month(e: &Expense, today: NaiveDate) -> bool {
    e.date.month() == today.month() && e.date.year() == today.year()
}

fn generate_id() -> String {
    format!("exp_{}", Uuid::new_v4().simple())
}
