// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use std::path::PathBuf;

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finplanner")
        .about("Track income and expenses, browse monthly summaries and spending reports")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(crate::db::DB_ENV)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (repeat for debug)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction dated now (or --date)")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .short('a')
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .action(ArgAction::SetTrue)
                                .help("Record income instead of an expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .conflicts_with("income")
                                .help("Expense category (see `categories`)"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD[ HH:MM:SS]"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg().help("Only this month"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Monthly income, expenses and category breakdown")
                .arg(month_arg())
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .action(ArgAction::SetTrue)
                        .help("Re-render whenever the data changes"),
                )
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .default_value("1000")
                        .value_parser(value_parser!(u64))
                        .help("Polling interval for --watch"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("report")
                .about("Category gauges and spend by day")
                .arg(month_arg())
                .args(json_args()),
        )
        .subcommand(Command::new("categories").about("List expense categories"))
        .subcommand(
            Command::new("profile")
                .about("Show or edit the local profile")
                .subcommand(Command::new("show").args(json_args()))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("email").long("email"))
                        .arg(Arg::new("picture").long("picture").value_name("URI"))
                        .arg(
                            Arg::new("clear-picture")
                                .long("clear-picture")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("picture"),
                        ),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in (local only)")
                .arg(Arg::new("email").long("email"))
                .arg(Arg::new("password").long("password"))
                .arg(
                    Arg::new("guest")
                        .long("guest")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["email", "password"]),
                )
                .group(
                    ArgGroup::new("who")
                        .args(["email", "guest"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("signup")
                .about("Create a local account")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("accept-terms")
                        .long("accept-terms")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("shell").about("Interactive session"))
}
