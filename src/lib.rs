// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod cli;
pub mod commands;
pub mod expense;
pub mod kv;
pub mod models;
pub mod profile;
pub mod snapshot;
pub mod utils;
