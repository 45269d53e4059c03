// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local sign-in and sign-up. Nothing is checked against a server and no
//! password is stored.

use crate::forms::{SignIn, SignUp};
use crate::profile;
use anyhow::Result;
use rusqlite::Connection;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let p = profile::load(conn)?;
    if sub.get_flag("guest") {
        println!("Continuing as {} <{}>", p.name, p.email);
        return Ok(());
    }
    let form = SignIn {
        email: sub.get_one::<String>("email").cloned().unwrap_or_default(),
        password: sub.get_one::<String>("password").cloned().unwrap_or_default(),
    };
    form.validate()?;
    tracing::info!(email = %form.email.trim(), "signed in");
    println!("Welcome back, {}", p.name);
    Ok(())
}

pub fn signup(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = SignUp {
        email: sub.get_one::<String>("email").cloned().unwrap_or_default(),
        password: sub.get_one::<String>("password").cloned().unwrap_or_default(),
        terms_accepted: sub.get_flag("accept-terms"),
    };
    let p = form.validate(profile::load(conn)?)?;
    profile::save(conn, &p)?;
    println!("Account created for {}", p.email);
    Ok(())
}
