// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly figures derived from one month's transactions.
//!
//! Everything here is recomputed from scratch on each snapshot; nothing is
//! carried between calls.

use crate::models::Transaction;
use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

/// Name of the gauge that merges every category past the top two.
pub const OTHER_GAUGE: &str = "Other";

const TOP_GAUGES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub spent: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub chart_data: Vec<CategorySpend>,
}

impl MonthlySummary {
    pub fn balance(&self) -> Decimal {
        self.total_income.saturating_sub(self.total_expenses)
    }

    pub fn balance_tone(&self) -> BalanceTone {
        if self.balance() >= Decimal::ZERO {
            BalanceTone::Positive
        } else {
            BalanceTone::Negative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeLevel {
    Low,
    Medium,
    High,
}

/// A category's share of the month's expenses.
///
/// `budget` holds the month's total expenses rather than a spending ceiling,
/// so a gauge reads as "share of everything spent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gauge {
    pub category: String,
    pub spent: Decimal,
    pub budget: Decimal,
}

impl Gauge {
    pub fn progress(&self) -> Decimal {
        share_of(self.spent, self.budget)
    }

    /// Whole percent, halves rounded up.
    pub fn percent(&self) -> Decimal {
        (self.progress() * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn level(&self) -> GaugeLevel {
        let p = self.progress();
        if p < Decimal::new(25, 2) {
            GaugeLevel::Low
        } else if p < Decimal::new(5, 1) {
            GaugeLevel::Medium
        } else {
            GaugeLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySpend {
    pub day: u32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportsData {
    pub gauges: Vec<Gauge>,
    pub daily: Vec<DailySpend>,
}

fn expenses(txs: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    txs.iter().filter(|t| t.is_expense)
}

/// Sum that clamps at `Decimal::MAX` instead of panicking.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `amount` as a fraction of `total`, 0 when nothing was spent.
pub fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        amount / total
    } else {
        Decimal::ZERO
    }
}

pub fn total_income(txs: &[Transaction]) -> Decimal {
    saturating_sum(txs.iter().filter(|t| !t.is_expense).map(|t| t.amount))
}

pub fn total_expenses(txs: &[Transaction]) -> Decimal {
    saturating_sum(expenses(txs).map(|t| t.amount))
}

/// Expense sums per category, in the order each category is first seen.
pub fn category_breakdown(txs: &[Transaction]) -> Vec<CategorySpend> {
    let mut out: Vec<CategorySpend> = Vec::new();
    for t in expenses(txs) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(c) => c.amount = c.amount.saturating_add(t.amount),
            None => out.push(CategorySpend {
                category: t.category.clone(),
                amount: t.amount,
            }),
        }
    }
    out
}

/// Categories with their share of total expenses, largest first. A month
/// without expenses gives every category a share of zero.
pub fn category_shares(txs: &[Transaction]) -> Vec<CategoryShare> {
    let total = total_expenses(txs);
    let mut shares: Vec<CategoryShare> = category_breakdown(txs)
        .into_iter()
        .map(|c| CategoryShare {
            percentage: share_of(c.amount, total),
            category: c.category,
            spent: c.amount,
        })
        .collect();
    // sort_by is stable: ties keep first-seen order
    shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    shares
}

pub fn budget_gauges(txs: &[Transaction]) -> Vec<Gauge> {
    let total = total_expenses(txs);
    let shares = category_shares(txs);
    let mut gauges: Vec<Gauge> = shares
        .iter()
        .take(TOP_GAUGES)
        .map(|s| Gauge {
            category: s.category.clone(),
            spent: s.spent,
            budget: total,
        })
        .collect();

    let rest = shares.iter().skip(TOP_GAUGES);
    if shares.len() > TOP_GAUGES {
        gauges.push(Gauge {
            category: OTHER_GAUGE.to_string(),
            spent: saturating_sum(rest.map(|s| s.spent)),
            budget: total,
        });
    }
    gauges
}

/// Expense sums per day of month, ascending. Days without spend are absent.
pub fn daily_spend(txs: &[Transaction]) -> Vec<DailySpend> {
    let mut by_day: BTreeMap<u32, Decimal> = BTreeMap::new();
    for t in expenses(txs) {
        let day = by_day.entry(t.date.day()).or_insert(Decimal::ZERO);
        *day = day.saturating_add(t.amount);
    }
    by_day
        .into_iter()
        .map(|(day, amount)| DailySpend { day, amount })
        .collect()
}

pub fn summarize(txs: &[Transaction]) -> MonthlySummary {
    MonthlySummary {
        total_income: total_income(txs),
        total_expenses: total_expenses(txs),
        chart_data: category_breakdown(txs),
    }
}

pub fn reports(txs: &[Transaction]) -> ReportsData {
    ReportsData {
        gauges: budget_gauges(txs),
        daily: daily_spend(txs),
    }
}
