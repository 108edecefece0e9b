// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::kv::KeyValueStore;
use crate::models::{Category, LivingType};
use crate::profile::ProfileStore;
use crate::utils::{format_currency, maybe_print_json, parse_amount, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(kv: &dyn KeyValueStore, profile: &mut ProfileStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(profile, sub)?,
        Some(("set-name", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            profile.set_user_name(kv, name)?;
            println!("Name set to {}", name);
        }
        Some(("set-college", sub)) => {
            let college = sub.get_one::<String>("college").unwrap();
            profile.set_college_name(kv, college)?;
            println!("College set to {}", college);
        }
        Some(("set-budget", sub)) => {
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
            profile.set_monthly_budget(kv, amount)?;
            println!("Monthly budget set to {}", format_currency(amount));
        }
        Some(("set-living", sub)) => {
            let raw = sub.get_one::<String>("type").unwrap();
            let living = LivingType::parse(raw)
                .ok_or_else(|| anyhow!("Invalid living type '{}', expected hostel|home", raw))?;
            profile.set_living_type(kv, living)?;
            println!(
                "Living type set to {}; categories reset to its defaults",
                living.as_str()
            );
        }
        Some(("set-categories", sub)) => {
            let spec = sub.get_one::<String>("spec").unwrap();
            let categories = parse_category_spec(spec)?;
            let n = categories.len();
            profile.set_categories(kv, categories)?;
            println!("Selected {} categories", n);
        }
        Some(("categories", sub)) => categories(profile, sub)?,
        Some(("complete", _)) => {
            profile.complete_onboarding(kv)?;
            println!("Onboarding complete");
        }
        Some(("reset", _)) => {
            profile.reset(kv)?;
            println!("Profile reset to defaults (expenses are untouched)");
        }
        _ => {}
    }
    Ok(())
}

/// "id:name:icon,id:name:icon" -> categories, order preserved.
pub fn parse_category_spec(spec: &str) -> Result<Vec<Category>> {
    spec.split(',')
        .map(|chunk| {
            let parts: Vec<&str> = chunk.splitn(3, ':').collect();
            match parts.as_slice() {
                [id, name, icon] if !id.trim().is_empty() => {
                    Ok(Category::new(id.trim(), name.trim(), icon.trim()))
                }
                _ => Err(anyhow!(
                    "Invalid category '{}', expected id:name:icon",
                    chunk
                )),
            }
        })
        .collect()
}

fn show(profile: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let p = profile.profile();
    if maybe_print_json(json_flag, jsonl_flag, p)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Name".into(), p.user_name.clone().unwrap_or_default()],
        vec!["College".into(), p.college_name.clone().unwrap_or_default()],
        vec!["Monthly budget".into(), format_currency(p.monthly_budget)],
        vec!["Living type".into(), p.living_type.as_str().into()],
        vec![
            "Categories".into(),
            p.selected_categories.len().to_string(),
        ],
        vec!["Onboarded".into(), p.is_onboarded.to_string()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn categories(profile: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let cats = &profile.profile().selected_categories;
    if maybe_print_json(json_flag, jsonl_flag, cats)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = cats
        .iter()
        .map(|c| vec![c.id.clone(), c.name.clone(), c.icon.clone()])
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Icon"], rows));
    Ok(())
}
