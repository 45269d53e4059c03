// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EXPENSE_CATEGORIES, INCOME_CATEGORY};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let mut data: Vec<Vec<String>> = EXPENSE_CATEGORIES
        .iter()
        .map(|c| vec![c.to_string(), "expense".to_string()])
        .collect();
    data.push(vec![INCOME_CATEGORY.to_string(), "income".to_string()]);
    println!("{}", pretty_table(&["Category", "Kind"], data));
    Ok(())
}
