// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::month::{SelectedMonth, YearMonth};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Slice colors for the category breakdown, assigned by position.
pub const SLICE_COLORS: [&str; 7] = [
    "#3F51B5", "#F44336", "#9C27B0", "#009688", "#FF9800", "#795548", "#607D8B",
];

pub fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Accepts `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD` (taken as midnight).
pub fn parse_date(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, crate::models::DATE_FORMAT) {
        return Ok(dt);
    }
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| {
        format!(
            "Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS",
            s
        )
    })?;
    Ok(d.and_time(NaiveTime::default()))
}

/// The `--month` argument as a cursor, or the current month when absent.
pub fn selected_month(sub: &clap::ArgMatches) -> Result<SelectedMonth> {
    let mut sel = SelectedMonth::today();
    if let Some(m) = sub.get_one::<String>("month") {
        sel.select(YearMonth::parse(m)?)?;
    }
    Ok(sel)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d.round_dp(2))
}

/// Horizontal bar of `width` cells filled in proportion to `value / max`.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).max(1);
    "█".repeat(filled)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_both_shapes() {
        assert_eq!(
            parse_date("2025-08-03").unwrap().to_string(),
            "2025-08-03 00:00:00"
        );
        assert_eq!(
            parse_date("2025-08-03 17:45:00").unwrap().to_string(),
            "2025-08-03 17:45:00"
        );
        assert!(parse_date("03/08/2025").is_err());
    }

    #[test]
    fn bar_scales_and_never_vanishes_for_spend() {
        assert_eq!(bar(Decimal::from(10), Decimal::from(10), 20).chars().count(), 20);
        assert_eq!(bar(Decimal::from(5), Decimal::from(10), 20).chars().count(), 10);
        assert_eq!(bar(Decimal::new(1, 2), Decimal::from(10), 20).chars().count(), 1);
        assert!(bar(Decimal::ZERO, Decimal::from(10), 20).is_empty());
    }

    #[test]
    fn slice_colors_wrap_around() {
        assert_eq!(slice_color(0), slice_color(SLICE_COLORS.len()));
    }
}
