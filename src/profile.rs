// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProfileData;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

const KEY_NAME: &str = "name";
const KEY_EMAIL: &str = "email";
const KEY_PICTURE_URI: &str = "picture_uri";

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Stored profile, with `Guest` defaults for anything never saved.
pub fn load(conn: &Connection) -> Result<ProfileData> {
    let defaults = ProfileData::default();
    Ok(ProfileData {
        name: get_setting(conn, KEY_NAME)?.unwrap_or(defaults.name),
        email: get_setting(conn, KEY_EMAIL)?.unwrap_or(defaults.email),
        picture_uri: get_setting(conn, KEY_PICTURE_URI)?,
    })
}

/// Overwrite the whole profile.
pub fn save(conn: &Connection, profile: &ProfileData) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    set_setting(&tx, KEY_NAME, &profile.name)?;
    set_setting(&tx, KEY_EMAIL, &profile.email)?;
    match &profile.picture_uri {
        Some(uri) => set_setting(&tx, KEY_PICTURE_URI, uri)?,
        None => {
            tx.execute(
                "DELETE FROM settings WHERE key=?1",
                params![KEY_PICTURE_URI],
            )?;
        }
    }
    tx.commit()?;
    tracing::info!(name = %profile.name, email = %profile.email, "profile saved");
    Ok(())
}
