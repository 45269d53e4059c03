// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use finplanner::aggregate::OTHER_GAUGE;
use finplanner::db;
use finplanner::finance::Finance;
use finplanner::forms::TransactionForm;
use finplanner::models::NewTransaction;
use finplanner::month::{SelectedMonth, YearMonth};
use finplanner::store::TransactionStore;
use rust_decimal::Decimal;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn entry(amount: &str, category: &str, date: &str) -> NewTransaction {
    TransactionForm {
        description: format!("{} {}", category, amount),
        amount: amount.into(),
        is_expense: category != "income",
        category: Some(category.into()),
    }
    .validate(dt(date))
    .unwrap()
}

/// A view whose "today" is 2025-08-19.
fn finance() -> Finance {
    let store = TransactionStore::new(db::open_in_memory().unwrap());
    let today = NaiveDate::from_ymd_opt(2025, 8, 19).unwrap();
    Finance::new(store, SelectedMonth::new(today)).unwrap()
}

#[test]
fn summary_follows_added_transactions() {
    let mut f = finance();
    assert_eq!(f.summary().total_expenses, Decimal::ZERO);

    f.add_transaction(&entry("100", "income", "2025-08-01 08:00:00")).unwrap();
    f.add_transaction(&entry("40", "Food", "2025-08-02 12:00:00")).unwrap();
    f.add_transaction(&entry("10", "Food", "2025-08-03 12:00:00")).unwrap();

    let s = f.summary();
    assert_eq!(s.total_income, Decimal::from(100));
    assert_eq!(s.total_expenses, Decimal::from(50));
    assert_eq!(s.balance(), Decimal::from(50));
    assert_eq!(s.chart_data.len(), 1);
    assert_eq!(s.chart_data[0].category, "Food");
    assert_eq!(s.chart_data[0].amount, Decimal::from(50));
    assert_eq!(f.transactions().len(), 3);
}

#[test]
fn reports_follow_the_selected_month() {
    let mut f = finance();
    f.add_transaction(&entry("60", "Housing", "2025-07-05 12:00:00")).unwrap();
    f.add_transaction(&entry("30", "Food", "2025-07-05 18:00:00")).unwrap();
    f.add_transaction(&entry("10", "Pets", "2025-07-12 12:00:00")).unwrap();
    f.add_transaction(&entry("3", "Food", "2025-08-02 12:00:00")).unwrap();

    assert_eq!(f.reports().gauges.len(), 1);

    f.go_to_previous_month().unwrap();
    assert_eq!(f.selected(), YearMonth::new(2025, 7).unwrap());
    let r = f.reports();
    let names: Vec<_> = r.gauges.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(names, vec!["Housing", "Food", OTHER_GAUGE]);
    assert!(r.gauges.iter().all(|g| g.budget == Decimal::from(100)));
    let days: Vec<_> = r.daily.iter().map(|d| (d.day, d.amount)).collect();
    assert_eq!(
        days,
        vec![(5, Decimal::from(90)), (12, Decimal::from(10))]
    );
}

#[test]
fn next_month_is_refused_at_the_current_month() {
    let mut f = finance();
    assert!(!f.can_go_next());
    assert!(!f.go_to_next_month().unwrap());
    assert_eq!(f.selected(), YearMonth::new(2025, 8).unwrap());

    f.go_to_previous_month().unwrap();
    f.go_to_previous_month().unwrap();
    assert!(f.can_go_next());
    assert!(f.go_to_next_month().unwrap());
    assert!(f.go_to_next_month().unwrap());
    assert!(!f.can_go_next());
}

#[test]
fn month_rollover_unlocks_next() {
    let mut f = finance();
    f.add_transaction(&entry("7", "Pets", "2025-09-01 09:00:00")).unwrap();
    assert!(!f.can_go_next());

    assert!(!f.sync_today(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
    assert!(f.sync_today(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
    assert_eq!(f.selected(), YearMonth::new(2025, 8).unwrap());
    assert!(f.can_go_next());

    assert!(f.go_to_next_month().unwrap());
    assert_eq!(f.selected(), YearMonth::new(2025, 9).unwrap());
    assert_eq!(f.summary().total_expenses, Decimal::from(7));
    assert!(!f.can_go_next());
}

#[test]
fn switching_month_replaces_the_live_feed() {
    let mut f = finance();
    f.add_transaction(&entry("5", "Food", "2025-08-02 12:00:00")).unwrap();
    f.select_month(YearMonth::new(2025, 6).unwrap()).unwrap();
    assert!(f.transactions().is_empty());

    // an August write must not leak into the June view
    f.add_transaction(&entry("7", "Food", "2025-08-03 12:00:00")).unwrap();
    assert!(f.transactions().is_empty());
    assert_eq!(f.summary().total_expenses, Decimal::ZERO);

    f.select_month(YearMonth::new(2025, 8).unwrap()).unwrap();
    assert_eq!(f.summary().total_expenses, Decimal::from(12));
    assert!(f.select_month(YearMonth::new(2025, 9).unwrap()).is_err());
}

#[test]
fn delete_updates_derived_figures() {
    let mut f = finance();
    let id = f.add_transaction(&entry("20", "Food", "2025-08-05 12:00:00")).unwrap();
    f.add_transaction(&entry("5", "Food", "2025-08-05 13:00:00")).unwrap();
    assert_eq!(f.reports().daily[0].amount, Decimal::from(25));

    assert!(f.delete_transaction(id).unwrap());
    assert_eq!(f.reports().daily[0].amount, Decimal::from(5));
    assert!(!f.refresh().unwrap());
    assert!(f.all_transactions().unwrap().iter().all(|t| t.id != id));
}
