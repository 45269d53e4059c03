// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use finplanner::{cli, commands, db, logging, store::TransactionStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init(matches.get_count("verbose"));

    let db_arg = matches.get_one::<PathBuf>("db").cloned();
    let conn = db::open_or_init(db_arg.as_deref())?;
    let mut store = TransactionStore::new(conn);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                db::db_path(db_arg.as_deref())?.display()
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("history", sub)) => commands::history::handle(store, sub)?,
        Some(("report", sub)) => commands::reports::handle(store, sub)?,
        Some(("categories", _)) => commands::categories::handle()?,
        Some(("profile", sub)) => commands::profile::handle(store.conn(), sub)?,
        Some(("login", sub)) => commands::auth::login(store.conn(), sub)?,
        Some(("signup", sub)) => commands::auth::signup(store.conn(), sub)?,
        Some(("shell", _)) => commands::shell::handle(store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
