// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProfileData;
use crate::profile;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => {
            let p = profile::load(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
                println!("{}", profile_table(&p));
            }
        }
        _ => println!("{}", profile_table(&profile::load(conn)?)),
    }
    Ok(())
}

pub fn profile_table(p: &ProfileData) -> comfy_table::Table {
    pretty_table(
        &["Name", "Email", "Picture"],
        vec![vec![
            p.name.clone(),
            p.email.clone(),
            p.picture_uri.clone().unwrap_or_default(),
        ]],
    )
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut p = profile::load(conn)?;
    if let Some(name) = sub.get_one::<String>("name") {
        p.name = name.trim().to_string();
    }
    if let Some(email) = sub.get_one::<String>("email") {
        p.email = email.trim().to_string();
    }
    if let Some(uri) = sub.get_one::<String>("picture") {
        p.picture_uri = Some(uri.to_string());
    }
    if sub.get_flag("clear-picture") {
        p.picture_uri = None;
    }
    profile::save(conn, &p)?;
    println!("Saved profile for {} <{}>", p.name, p.email);
    Ok(())
}
