// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{BalanceTone, MonthlySummary, share_of};
use crate::finance::Finance;
use crate::month::YearMonth;
use crate::store::TransactionStore;
use crate::utils::{bar, fmt_money, maybe_print_json, pretty_table, selected_month, slice_color};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

pub const NO_EXPENSES: &str = "No expense data for this month.";

#[derive(Serialize)]
pub struct HistoryView<'a> {
    pub month: YearMonth,
    pub can_go_next: bool,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub saved: Decimal,
    pub saved_tone: BalanceTone,
    pub breakdown: Vec<Slice<'a>>,
}

#[derive(Serialize)]
pub struct Slice<'a> {
    pub category: &'a str,
    pub amount: Decimal,
    pub share: Decimal,
    pub color: &'static str,
}

impl<'a> HistoryView<'a> {
    pub fn new(month: YearMonth, can_go_next: bool, summary: &'a MonthlySummary) -> Self {
        let total = summary.total_expenses;
        let breakdown = summary
            .chart_data
            .iter()
            .enumerate()
            .map(|(i, c)| Slice {
                category: &c.category,
                amount: c.amount,
                share: share_of(c.amount, total).round_dp(4),
                color: slice_color(i),
            })
            .collect();
        Self {
            month,
            can_go_next,
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            saved: summary.balance(),
            saved_tone: summary.balance_tone(),
            breakdown,
        }
    }
}

pub fn handle(store: TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut finance = Finance::new(store, selected_month(sub)?)?;
    let mut out = std::io::stdout();

    let show = |finance: &Finance, out: &mut std::io::Stdout| -> Result<()> {
        let view = HistoryView::new(finance.selected(), finance.can_go_next(), finance.summary());
        if !maybe_print_json(json_flag, jsonl_flag, &view)? {
            render(&view, out)?;
        }
        Ok(())
    };
    show(&finance, &mut out)?;

    if sub.get_flag("watch") {
        let interval = *sub.get_one::<u64>("interval-ms").unwrap_or(&1000);
        loop {
            std::thread::sleep(Duration::from_millis(interval));
            let rolled_over = finance.sync_today(chrono::Local::now().date_naive());
            if finance.refresh()? || rolled_over {
                show(&finance, &mut out)?;
            }
        }
    }
    Ok(())
}

pub fn month_header(month: YearMonth, can_go_next: bool) -> String {
    format!(
        "◀ {} {}",
        month.label(),
        if can_go_next { "▶" } else { "·" }
    )
}

pub fn render(view: &HistoryView, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", month_header(view.month, view.can_go_next))?;
    let saved = match view.saved_tone {
        BalanceTone::Positive => format!("{} (+)", fmt_money(&view.saved)),
        BalanceTone::Negative => format!("{} (-)", fmt_money(&view.saved)),
    };
    let totals = vec![
        vec!["Income".to_string(), fmt_money(&view.total_income)],
        vec!["Expenses".to_string(), fmt_money(&view.total_expenses)],
        vec!["Saved".to_string(), saved],
    ];
    writeln!(out, "{}", pretty_table(&["", "Amount"], totals))?;

    if view.breakdown.is_empty() {
        writeln!(out, "{}", NO_EXPENSES)?;
        return Ok(());
    }
    let rows = view
        .breakdown
        .iter()
        .map(|s| {
            vec![
                s.category.to_string(),
                fmt_money(&s.amount),
                format!("{:.1}%", s.share * Decimal::ONE_HUNDRED),
                s.color.to_string(),
                bar(s.share, Decimal::ONE, 20),
            ]
        })
        .collect();
    writeln!(
        out,
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color", ""], rows)
    )?;
    Ok(())
}
