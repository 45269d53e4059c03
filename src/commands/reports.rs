// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{DailySpend, GaugeLevel, ReportsData};
use crate::commands::history::{NO_EXPENSES, month_header};
use crate::finance::Finance;
use crate::month::YearMonth;
use crate::store::TransactionStore;
use crate::utils::{bar, fmt_money, maybe_print_json, pretty_table, selected_month};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
pub struct GaugeView<'a> {
    pub category: &'a str,
    pub spent: Decimal,
    pub budget: Decimal,
    pub percent: Decimal,
    pub level: GaugeLevel,
}

#[derive(Serialize)]
pub struct ReportsView<'a> {
    pub month: YearMonth,
    pub gauges: Vec<GaugeView<'a>>,
    pub daily: &'a [DailySpend],
}

impl<'a> ReportsView<'a> {
    pub fn new(month: YearMonth, data: &'a ReportsData) -> Self {
        let gauges = data
            .gauges
            .iter()
            .map(|g| GaugeView {
                category: &g.category,
                spent: g.spent,
                budget: g.budget,
                percent: g.percent(),
                level: g.level(),
            })
            .collect();
        Self {
            month,
            gauges,
            daily: &data.daily,
        }
    }
}

pub fn handle(store: TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let finance = Finance::new(store, selected_month(sub)?)?;
    let view = ReportsView::new(finance.selected(), finance.reports());
    if !maybe_print_json(json_flag, jsonl_flag, &view)? {
        let mut out = std::io::stdout();
        writeln!(
            out,
            "{}",
            month_header(finance.selected(), finance.can_go_next())
        )?;
        render(&view, &mut out)?;
    }
    Ok(())
}

fn level_label(level: GaugeLevel) -> &'static str {
    match level {
        GaugeLevel::Low => "low",
        GaugeLevel::Medium => "medium",
        GaugeLevel::High => "high",
    }
}

pub fn render(view: &ReportsView, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Spending Breakdown")?;
    let gauges = view
        .gauges
        .iter()
        .map(|g| {
            vec![
                g.category.to_string(),
                fmt_money(&g.spent),
                fmt_money(&g.budget),
                format!("{}%", g.percent),
                level_label(g.level).to_string(),
                bar(g.percent, Decimal::ONE_HUNDRED, 20),
            ]
        })
        .collect();
    writeln!(
        out,
        "{}",
        pretty_table(&["Category", "Spent", "Of total", "%", "Level", ""], gauges)
    )?;

    writeln!(out, "Spend by Days")?;
    if view.daily.is_empty() {
        writeln!(out, "{}", NO_EXPENSES)?;
        return Ok(());
    }
    let max = view
        .daily
        .iter()
        .map(|d| d.amount)
        .max()
        .unwrap_or(Decimal::ONE);
    let rows = view
        .daily
        .iter()
        .map(|d| vec![d.day.to_string(), fmt_money(&d.amount), bar(d.amount, max, 30)])
        .collect();
    writeln!(out, "{}", pretty_table(&["Day", "Spent", ""], rows))?;
    Ok(())
}
