// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::forms::TransactionForm;
use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, now, parse_date, pretty_table, selected_month};
use anyhow::{Result, bail};

pub fn handle(store: &mut TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> TransactionForm {
    TransactionForm {
        description: sub.get_one::<String>("description").cloned().unwrap_or_default(),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        is_expense: !sub.get_flag("income"),
        category: sub.get_one::<String>("category").cloned(),
    }
}

fn add(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let when = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => now(),
    };
    let tx = form_from_args(sub).validate(when)?;
    let id = store.insert(&tx)?;
    println!(
        "Recorded {} {} ({}) '{}' on {} as #{}",
        if tx.is_expense { "expense" } else { "income" },
        fmt_money(&tx.amount),
        tx.category,
        tx.description,
        tx.date,
        id
    );
    Ok(())
}

fn list(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", transactions_table(&data));
    }
    Ok(())
}

pub fn transactions_table(data: &[Transaction]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.to_string(),
                t.description.clone(),
                t.category.clone(),
                if t.is_expense {
                    format!("-{}", fmt_money(&t.amount))
                } else {
                    format!("+{}", fmt_money(&t.amount))
                },
            ]
        })
        .collect();
    pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
}

/// All transactions, or one month's with `--month`, newest first.
pub fn query_rows(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut data = if sub.get_one::<String>("month").is_some() {
        let (start, end) = selected_month(sub)?.bounds();
        store.in_range(start, end)?
    } else {
        store.all()?
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn rm(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap_or(&0);
    let Some(tx) = store.get(id)? else {
        bail!("Transaction #{} not found", id);
    };
    store.delete(id)?;
    println!(
        "Deleted #{} '{}' ({} on {})",
        tx.id,
        tx.description,
        fmt_money(&tx.amount),
        tx.date
    );
    Ok(())
}
