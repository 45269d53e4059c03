// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SQLite-backed transaction store with change-driven subscriptions.
//!
//! A [`Subscription`] re-delivers its full result set whenever the table may
//! have changed, either through this store or through another connection to
//! the same database file. Change detection combines the store's own write
//! counter with SQLite's `PRAGMA data_version`.

use crate::models::{DATE_FORMAT, NewTransaction, Transaction};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

const COLUMNS: &str = "id, amount, category, date, description, is_expense";

pub struct TransactionStore {
    conn: Connection,
    writes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Generation {
    writes: u64,
    data_version: i64,
}

impl TransactionStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn, writes: 0 }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn insert(&mut self, tx: &NewTransaction) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO transactions(amount, category, date, description, is_expense)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    tx.amount.to_string(),
                    tx.category,
                    tx.date.format(DATE_FORMAT).to_string(),
                    tx.description,
                    tx.is_expense
                ],
            )
            .context("Insert transaction")?;
        let id = self.conn.last_insert_rowid();
        self.writes += 1;
        tracing::info!(id, amount = %tx.amount, category = %tx.category, "transaction stored");
        Ok(id)
    }

    /// Remove one transaction. Returns false when no row had that id.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])
            .with_context(|| format!("Delete transaction {}", id))?;
        if n > 0 {
            self.writes += 1;
            tracing::info!(id, "transaction deleted");
        }
        Ok(n > 0)
    }

    pub fn get(&self, id: i64) -> Result<Option<Transaction>> {
        let sql = format!("SELECT {} FROM transactions WHERE id=?1", COLUMNS);
        let tx = self
            .conn
            .query_row(&sql, params![id], map_row)
            .optional()
            .with_context(|| format!("Load transaction {}", id))?;
        Ok(tx)
    }

    /// Every transaction, newest first.
    pub fn all(&self) -> Result<Vec<Transaction>> {
        let sql = format!(
            "SELECT {} FROM transactions ORDER BY date DESC, id DESC",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], map_row)?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    /// Transactions with `start <= date <= end`, newest first.
    pub fn in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Transaction>> {
        let sql = format!(
            "SELECT {} FROM transactions WHERE date >= ?1 AND date <= ?2
             ORDER BY date DESC, id DESC",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                start.format(DATE_FORMAT).to_string(),
                end.format(DATE_FORMAT).to_string()
            ],
            map_row,
        )?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    pub fn subscribe_all(&self) -> Subscription {
        Subscription::new(Query::All)
    }

    pub fn subscribe_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Subscription {
        Subscription::new(Query::Range(start, end))
    }

    fn generation(&self) -> Result<Generation> {
        let data_version: i64 = self
            .conn
            .query_row("PRAGMA data_version", [], |r| r.get(0))
            .context("Read data_version")?;
        Ok(Generation {
            writes: self.writes,
            data_version,
        })
    }
}

fn map_row(r: &Row) -> rusqlite::Result<Transaction> {
    let amount: String = r.get(1)?;
    let amount = amount
        .parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    let date: String = r.get(3)?;
    let date = NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(Transaction {
        id: r.get(0)?,
        amount,
        category: r.get(2)?,
        date,
        description: r.get(4)?,
        is_expense: r.get(5)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    All,
    Range(NaiveDateTime, NaiveDateTime),
}

/// A live query. Dropping it ends the subscription.
#[derive(Debug)]
pub struct Subscription {
    query: Query,
    seen: Option<Generation>,
}

impl Subscription {
    fn new(query: Query) -> Self {
        Self { query, seen: None }
    }

    pub fn query(&self) -> Query {
        self.query
    }

    /// Fresh snapshot on the first poll and after every change to the store,
    /// `None` when nothing changed since the last delivery.
    pub fn poll(&mut self, store: &TransactionStore) -> Result<Option<Vec<Transaction>>> {
        let current = store.generation()?;
        if self.seen == Some(current) {
            return Ok(None);
        }
        let snapshot = match self.query {
            Query::All => store.all()?,
            Query::Range(start, end) => store.in_range(start, end)?,
        };
        tracing::debug!(query = ?self.query, rows = snapshot.len(), "subscription delivered");
        self.seen = Some(current);
        Ok(Some(snapshot))
    }
}
