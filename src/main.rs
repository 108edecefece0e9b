// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendwise::expense::ExpenseStore;
use spendwise::kv::{KeyValueStore, SqliteKv};
use spendwise::profile::ProfileStore;
use spendwise::{cli, commands, kv};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let sink = SqliteKv::open_default()?;
    let kv: &dyn KeyValueStore = &sink;
    let mut expenses = ExpenseStore::load(kv);
    let mut profile = ProfileStore::load(kv);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Storage initialized at {}", kv::data_path()?.display());
        }
        Some(("profile", sub)) => commands::profile::handle(kv, &mut profile, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(kv, &mut expenses, &profile, sub)?,
        Some(("insights", sub)) => commands::insights::handle(&expenses, &profile, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&expenses, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
