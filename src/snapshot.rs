// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::kv::KeyValueStore;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned envelope written to the key-value sink. The version tag lets a
/// future migration distinguish old state from garbage.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<T> {
    version: u32,
    state: T,
}

/// Rehydrate a store's state from its slot. A missing key, unparseable
/// payload, or unknown version all yield the default state; startup never
/// fails on bad persisted data.
pub fn load_or_default<T>(kv: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        _ => return T::default(),
    };
    match serde_json::from_str::<Snapshot<T>>(&raw) {
        Ok(snap) if snap.version == SNAPSHOT_VERSION => snap.state,
        _ => T::default(),
    }
}

pub fn save<T: Serialize>(kv: &dyn KeyValueStore, key: &str, state: &T) -> Result<()> {
    let snap = Snapshot {
        version: SNAPSHOT_VERSION,
        state,
    };
    let raw = serde_json::to_string(&snap).context("Serialize snapshot")?;
    kv.set(key, &raw)
        .with_context(|| format!("Persist snapshot '{}'", key))
}
