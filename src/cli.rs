// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .version(crate_version!())
        .about("Student expense tracking, monthly budgets, and spending insights")
        .subcommand(Command::new("init").about("Initialize local storage"))
        .subcommand(
            Command::new("profile")
                .about("Onboarding and profile configuration")
                .subcommand(json_flags(
                    Command::new("show").about("Show the current profile"),
                ))
                .subcommand(
                    Command::new("set-name")
                        .about("Set your name")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("set-college")
                        .about("Set your college name")
                        .arg(Arg::new("college").required(true)),
                )
                .subcommand(
                    Command::new("set-budget")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("set-living")
                        .about("Set living type (hostel|home); resets categories to that type's defaults")
                        .arg(Arg::new("type").required(true)),
                )
                .subcommand(
                    Command::new("set-categories")
                        .about("Replace the category set; spec is id:name:icon[,id:name:icon...]")
                        .arg(Arg::new("spec").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("categories").about("List the selected categories"),
                ))
                .subcommand(Command::new("complete").about("Mark onboarding complete"))
                .subcommand(Command::new("reset").about("Restore factory defaults")),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category id from the selected set"),
                        )
                        .arg(Arg::new("title").long("title"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD or 'YYYY-MM-DD HH:MM'; defaults to now"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses")
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("recent")
                        .about("Most recently recorded expenses")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an expense")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove an expense by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("clear")
                        .about("Remove all expenses")
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation"),
                        ),
                ),
        )
        .subcommand(json_flags(
            Command::new("insights").about("Monthly budget and spending overview"),
        ))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("expenses")
                        .about("Export all expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
