// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! View state behind the history and report views.
//!
//! [`Finance`] keeps one live range subscription for the selected month.
//! Changing the month replaces it, so only the latest month is ever
//! delivered; the previous subscription is dropped without being read.

use crate::aggregate::{self, MonthlySummary, ReportsData};
use crate::models::{NewTransaction, Transaction};
use crate::month::{SelectedMonth, YearMonth};
use crate::store::{Subscription, TransactionStore};
use anyhow::Result;
use chrono::NaiveDate;

pub struct Finance {
    store: TransactionStore,
    selected: SelectedMonth,
    month_feed: Subscription,
    month_rows: Vec<Transaction>,
    summary: MonthlySummary,
    reports: ReportsData,
}

impl Finance {
    pub fn new(store: TransactionStore, selected: SelectedMonth) -> Result<Self> {
        let (start, end) = selected.bounds();
        let month_feed = store.subscribe_range(start, end);
        let mut finance = Self {
            store,
            selected,
            month_feed,
            month_rows: Vec::new(),
            summary: MonthlySummary::default(),
            reports: ReportsData::default(),
        };
        finance.refresh()?;
        Ok(finance)
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn selected(&self) -> YearMonth {
        self.selected.get()
    }

    pub fn can_go_next(&self) -> bool {
        self.selected.can_go_next()
    }

    pub fn summary(&self) -> &MonthlySummary {
        &self.summary
    }

    pub fn reports(&self) -> &ReportsData {
        &self.reports
    }

    /// The selected month's rows, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.month_rows
    }

    pub fn all_transactions(&self) -> Result<Vec<Transaction>> {
        self.store.all()
    }

    pub fn add_transaction(&mut self, tx: &NewTransaction) -> Result<i64> {
        let id = self.store.insert(tx)?;
        self.refresh()?;
        Ok(id)
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<bool> {
        let removed = self.store.delete(id)?;
        self.refresh()?;
        Ok(removed)
    }

    pub fn go_to_previous_month(&mut self) -> Result<()> {
        self.selected.go_previous();
        self.resubscribe()
    }

    /// Returns false when already at the current month.
    pub fn go_to_next_month(&mut self) -> Result<bool> {
        if !self.selected.go_next() {
            return Ok(false);
        }
        self.resubscribe()?;
        Ok(true)
    }

    pub fn select_month(&mut self, month: YearMonth) -> Result<()> {
        self.selected.select(month)?;
        self.resubscribe()
    }

    /// Advance the current month when the calendar has rolled over since
    /// this view was created. The selected month is left as is.
    pub fn sync_today(&mut self, today: NaiveDate) -> bool {
        let moved = self.selected.set_today(today);
        if moved {
            tracing::debug!(current = %self.selected.current(), "current month advanced");
        }
        moved
    }

    /// Poll the month subscription and recompute the derived figures when a
    /// new snapshot arrived. Returns whether anything was recomputed.
    pub fn refresh(&mut self) -> Result<bool> {
        let Some(rows) = self.month_feed.poll(&self.store)? else {
            return Ok(false);
        };
        self.summary = aggregate::summarize(&rows);
        self.reports = aggregate::reports(&rows);
        self.month_rows = rows;
        Ok(true)
    }

    fn resubscribe(&mut self) -> Result<()> {
        let (start, end) = self.selected.bounds();
        tracing::debug!(month = %self.selected.get(), "switching month subscription");
        self.month_feed = self.store.subscribe_range(start, end);
        self.refresh()?;
        Ok(())
    }
}
