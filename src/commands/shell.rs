// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive session over a single [`Finance`] view.

use crate::commands::history::{self, HistoryView};
use crate::commands::profile::profile_table;
use crate::commands::reports::{self, ReportsView};
use crate::commands::transactions::transactions_table;
use crate::finance::Finance;
use crate::forms::TransactionForm;
use crate::models::INCOME_CATEGORY;
use crate::month::YearMonth;
use crate::utils::{fmt_money, now};
use crate::{profile, store::TransactionStore};
use anyhow::{Result, anyhow, bail};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  history                     income, expenses and breakdown for the month
  report                      gauges and spend by day for the month
  prev | next                 move to the previous / next month
  month YYYY-MM               jump to a month
  list [all]                  the month's transactions (or every one)
  add AMOUNT CATEGORY DESC..  record a transaction; CATEGORY 'income' for income
  rm ID                       delete a transaction
  profile                     show the profile
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    History,
    Report,
    Previous,
    Next,
    Month(YearMonth),
    List { all: bool },
    Add(TransactionFormArgs),
    Remove(i64),
    Profile,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFormArgs {
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl TransactionFormArgs {
    fn into_form(self) -> TransactionForm {
        let is_expense = !self.category.eq_ignore_ascii_case(INCOME_CATEGORY);
        TransactionForm {
            description: self.description,
            amount: self.amount,
            is_expense,
            category: is_expense.then_some(self.category),
        }
    }
}

/// Parse one input line. Blank lines give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let cmd = match cmd.to_ascii_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "history" | "h" => ShellCommand::History,
        "report" | "r" => ShellCommand::Report,
        "prev" | "p" => ShellCommand::Previous,
        "next" | "n" => ShellCommand::Next,
        "month" => {
            let m = words.next().ok_or_else(|| anyhow!("usage: month YYYY-MM"))?;
            ShellCommand::Month(YearMonth::parse(m)?)
        }
        "list" | "ls" => ShellCommand::List {
            all: words.next() == Some("all"),
        },
        "add" => {
            let amount = words.next();
            let category = words.next();
            let description = words.collect::<Vec<_>>().join(" ");
            match (amount, category) {
                (Some(a), Some(c)) => ShellCommand::Add(TransactionFormArgs {
                    amount: a.to_string(),
                    category: c.to_string(),
                    description,
                }),
                _ => bail!("usage: add AMOUNT CATEGORY DESCRIPTION"),
            }
        }
        "rm" | "del" => {
            let id = words
                .next()
                .ok_or_else(|| anyhow!("usage: rm ID"))?
                .trim_start_matches('#')
                .parse::<i64>()
                .map_err(|_| anyhow!("usage: rm ID"))?;
            ShellCommand::Remove(id)
        }
        "profile" => ShellCommand::Profile,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => bail!("unknown command '{}', try 'help'", other),
    };
    Ok(Some(cmd))
}

pub fn handle(store: TransactionStore) -> Result<()> {
    let mut finance = Finance::new(store, crate::month::SelectedMonth::today())?;
    let stdin = std::io::stdin();
    run(&mut finance, stdin.lock(), &mut std::io::stdout())
}

/// Read commands until `quit` or end of input. A failing command prints its
/// message and the session carries on.
pub fn run<R: BufRead>(finance: &mut Finance, input: R, out: &mut dyn Write) -> Result<()> {
    let profile = profile::load(finance.store().conn())?;
    writeln!(out, "Financial Planner, signed in as {}. Type 'help'.", profile.name)?;
    show_history(finance, out)?;

    for line in input.lines() {
        let line = line?;
        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        if cmd == ShellCommand::Quit {
            break;
        }
        if let Err(e) = execute(finance, cmd, out) {
            writeln!(out, "error: {}", e)?;
        }
    }
    Ok(())
}

fn execute(finance: &mut Finance, cmd: ShellCommand, out: &mut dyn Write) -> Result<()> {
    finance.sync_today(chrono::Local::now().date_naive());
    // pick up writes made by other processes
    finance.refresh()?;
    match cmd {
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::History => show_history(finance, out)?,
        ShellCommand::Report => {
            writeln!(
                out,
                "{}",
                history::month_header(finance.selected(), finance.can_go_next())
            )?;
            reports::render(&ReportsView::new(finance.selected(), finance.reports()), out)?;
        }
        ShellCommand::Previous => {
            finance.go_to_previous_month()?;
            show_history(finance, out)?;
        }
        ShellCommand::Next => {
            if !finance.go_to_next_month()? {
                writeln!(out, "Already at the current month.")?;
            } else {
                show_history(finance, out)?;
            }
        }
        ShellCommand::Month(m) => {
            finance.select_month(m)?;
            show_history(finance, out)?;
        }
        ShellCommand::List { all } => {
            let rows = if all {
                finance.all_transactions()?
            } else {
                finance.transactions().to_vec()
            };
            writeln!(out, "{}", transactions_table(&rows))?;
        }
        ShellCommand::Add(args) => {
            let tx = args.into_form().validate(now())?;
            let id = finance.add_transaction(&tx)?;
            writeln!(
                out,
                "Recorded {} ({}) '{}' as #{}",
                fmt_money(&tx.amount),
                tx.category,
                tx.description,
                id
            )?;
        }
        ShellCommand::Remove(id) => {
            if finance.delete_transaction(id)? {
                writeln!(out, "Deleted #{}", id)?;
            } else {
                bail!("Transaction #{} not found", id);
            }
        }
        ShellCommand::Profile => {
            let p = profile::load(finance.store().conn())?;
            writeln!(out, "{}", profile_table(&p))?;
        }
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn show_history(finance: &Finance, out: &mut dyn Write) -> Result<()> {
    let view = HistoryView::new(finance.selected(), finance.can_go_next(), finance.summary());
    history::render(&view, out)
}
