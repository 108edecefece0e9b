// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single logged spending event. `category_name` and `category_icon` are
/// denormalized snapshots taken when the expense was recorded, so renaming
/// or removing a category never rewrites history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: i64,
    pub title: String,
    pub category_id: String,
    pub category_name: String,
    pub category_icon: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Input for creating an expense; `id` and `created_at` are store-generated.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: i64,
    pub title: String,
    pub category_id: String,
    pub category_name: String,
    pub category_icon: String,
    pub date: NaiveDateTime,
}

/// Partial update for an existing expense. `id` and `created_at` are
/// immutable and deliberately not representable here.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<i64>,
    pub title: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub category_icon: Option<String>,
    pub date: Option<NaiveDateTime>,
}

/// A spending bucket. `icon` is a Lucide icon name resolved by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Onboarding classification; selects which default category set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LivingType {
    Hostel,
    Home,
}

impl LivingType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hostel" => Some(LivingType::Hostel),
            "home" => Some(LivingType::Home),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LivingType::Hostel => "hostel",
            LivingType::Home => "home",
        }
    }

    /// The default category set for this living type.
    pub fn default_categories(&self) -> Vec<Category> {
        match self {
            LivingType::Hostel => HOSTEL_CATEGORIES.clone(),
            LivingType::Home => HOME_CATEGORIES.clone(),
        }
    }
}

/// Onboarding/profile configuration owned by the ProfileStore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_name: Option<String>,
    pub college_name: Option<String>,
    pub monthly_budget: i64,
    pub living_type: LivingType,
    pub selected_categories: Vec<Category>,
    pub is_onboarded: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_name: None,
            college_name: None,
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            living_type: LivingType::Hostel,
            selected_categories: HOSTEL_CATEGORIES.clone(),
            is_onboarded: false,
        }
    }
}

/// The current month's highest-spend category with its total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category_id: String,
    pub category_name: String,
    pub category_icon: String,
    pub total: i64,
}

pub const DEFAULT_MONTHLY_BUDGET: i64 = 8000;

pub const BUDGET_PRESETS: [i64; 3] = [5000, 8000, 10000];

pub static HOSTEL_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new("canteen", "Canteen", "UtensilsCrossed"),
        Category::new("snacks", "Snacks", "Cookie"),
        Category::new("food-delivery", "Food Delivery", "Bike"),
        Category::new("auto-metro", "Auto/Metro", "Bus"),
        Category::new("hostel-rent", "Hostel Rent", "Building2"),
        Category::new("mess", "Mess", "Soup"),
        Category::new("exam-fees", "Exam Fees", "FileText"),
        Category::new("photocopy", "Photocopy/Print", "Printer"),
        Category::new("mobile-recharge", "Mobile Recharge", "Smartphone"),
        Category::new("other", "Other", "MoreHorizontal"),
    ]
});

pub static HOME_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new("food", "Food", "UtensilsCrossed"),
        Category::new("snacks", "Snacks", "Cookie"),
        Category::new("transport", "Transport", "Car"),
        Category::new("entertainment", "Entertainment", "Gamepad2"),
        Category::new("shopping", "Shopping", "ShoppingBag"),
        Category::new("education", "Education", "GraduationCap"),
        Category::new("mobile-recharge", "Mobile Recharge", "Smartphone"),
        Category::new("other", "Other", "MoreHorizontal"),
    ]
});
