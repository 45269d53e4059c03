// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar month arithmetic and the selected-month cursor.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Hour of the last day at which a month's range ends.
///
/// The range stops at 23:00:00, so rows stamped in the final hour of the
/// month fall outside of it.
pub const MONTH_END_HOUR: i64 = 23;

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
        Ok(Self(first))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0 + Days::new(u64::from(days_in_month(self.year(), self.month()) - 1))
    }

    pub fn previous(&self) -> Self {
        Self(self.0 - Months::new(1))
    }

    pub fn next(&self) -> Self {
        Self(self.0 + Months::new(1))
    }

    /// Long form used in headers, e.g. `October 2026`.
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }

    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        month_bounds(self.0.and_time(NaiveTime::default()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}

/// Start (day 1, 00:00:00) and end (last day, 23:00:00) of the month that
/// contains `reference`. Both ends are inclusive.
pub fn month_bounds(reference: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let ym = YearMonth::from_date(reference.date());
    let start = ym.first_day().and_time(NaiveTime::default());
    let end = ym.last_day().and_time(NaiveTime::default()) + Duration::hours(MONTH_END_HOUR);
    (start, end)
}

/// The month currently being browsed, never later than the real current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMonth {
    cursor: YearMonth,
    current: YearMonth,
}

impl SelectedMonth {
    /// Start at the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        let current = YearMonth::from_date(today);
        Self {
            cursor: current,
            current,
        }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn get(&self) -> YearMonth {
        self.cursor
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor < self.current
    }

    pub fn go_previous(&mut self) {
        self.cursor = self.cursor.previous();
    }

    /// Move forward one month. Returns false, leaving the cursor untouched,
    /// when it already sits on the current month.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.cursor = self.cursor.next();
        true
    }

    pub fn select(&mut self, month: YearMonth) -> Result<()> {
        if month > self.current {
            bail!("Month {} is in the future", month);
        }
        self.cursor = month;
        Ok(())
    }

    /// Move the current month up to the one containing `today`. The cursor
    /// stays put. Returns whether the current month changed.
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        let month = YearMonth::from_date(today);
        if month <= self.current {
            return false;
        }
        self.current = month;
        true
    }

    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.cursor.bounds()
    }
}
