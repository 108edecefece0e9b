// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::expense::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{Category, LivingType, Profile};
use crate::snapshot;
use anyhow::Result;
use std::collections::HashSet;

pub const PROFILE_KEY: &str = "onboarding-storage";

/// Onboarding/profile configuration: monthly budget, category set, living
/// type, onboarding flag. Field setters persist before returning, same as
/// the expense store. Budget-relative metrics live in `budget`; this store
/// never reads expense data.
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        Self {
            profile: snapshot::load_or_default(kv, PROFILE_KEY),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_onboarded(&self) -> bool {
        self.profile.is_onboarded
    }

    /// Look up a category in the current selected set.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.profile.selected_categories.iter().find(|c| c.id == id)
    }

    pub fn set_user_name(&mut self, kv: &dyn KeyValueStore, name: &str) -> Result<()> {
        self.profile.user_name = Some(name.to_string());
        self.save(kv)
    }

    pub fn set_college_name(&mut self, kv: &dyn KeyValueStore, college: &str) -> Result<()> {
        self.profile.college_name = Some(college.to_string());
        self.save(kv)
    }

    pub fn set_monthly_budget(&mut self, kv: &dyn KeyValueStore, budget: i64) -> Result<()> {
        if budget < 0 {
            return Err(StoreError::InvalidAmount(budget).into());
        }
        self.profile.monthly_budget = budget;
        self.save(kv)
    }

    /// Replace the selected category set. Duplicate ids are dropped, first
    /// occurrence wins, so the unique-by-id invariant always holds.
    pub fn set_categories(&mut self, kv: &dyn KeyValueStore, categories: Vec<Category>) -> Result<()> {
        let mut seen = HashSet::new();
        self.profile.selected_categories = categories
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();
        self.save(kv)
    }

    /// Change living type AND replace the category set with that type's
    /// defaults, discarding any prior customization. The coupling is
    /// intentional.
    pub fn set_living_type(&mut self, kv: &dyn KeyValueStore, living: LivingType) -> Result<()> {
        self.profile.living_type = living;
        self.profile.selected_categories = living.default_categories();
        self.save(kv)
    }

    pub fn complete_onboarding(&mut self, kv: &dyn KeyValueStore) -> Result<()> {
        self.profile.is_onboarded = true;
        self.save(kv)
    }

    /// Restore factory defaults (preset budget, hostel defaults, not
    /// onboarded). Does not touch the expense store.
    pub fn reset(&mut self, kv: &dyn KeyValueStore) -> Result<()> {
        self.profile = Profile::default();
        self.save(kv)
    }

    fn save(&self, kv: &dyn KeyValueStore) -> Result<()> {
        snapshot::save(kv, PROFILE_KEY, &self.profile)
    }
}
