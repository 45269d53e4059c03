// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use finplanner::db;
use finplanner::models::{INCOME_CATEGORY, NewTransaction};
use finplanner::month::month_bounds;
use finplanner::store::TransactionStore;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn expense(amount: i64, category: &str, date: &str) -> NewTransaction {
    NewTransaction {
        amount: Decimal::from(amount),
        category: category.into(),
        date: dt(date),
        description: format!("{} on {}", category, date),
        is_expense: true,
    }
}

fn setup() -> TransactionStore {
    TransactionStore::new(db::open_in_memory().unwrap())
}

#[test]
fn insert_assigns_ids_and_reads_back() {
    let mut store = setup();
    let new = expense(12, "Food", "2025-08-03 10:00:00");
    let id = store.insert(&new).unwrap();
    let second = store.insert(&new).unwrap();
    assert_ne!(id, second);
    assert_eq!(store.get(id).unwrap(), Some(new.with_id(id)));
}

#[test]
fn insert_then_all_is_newest_first_and_exactly_once() {
    let mut store = setup();
    store.insert(&expense(5, "Pets", "2025-08-01 09:00:00")).unwrap();
    let id = store.insert(&expense(7, "Food", "2025-08-20 09:00:00")).unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, id);
    assert_eq!(all.iter().filter(|t| t.id == id).count(), 1);

    assert!(store.delete(id).unwrap());
    assert!(store.all().unwrap().iter().all(|t| t.id != id));
    assert!(!store.delete(id).unwrap());
    assert!(store.all().unwrap().iter().all(|t| t.id != id));
}

#[test]
fn range_is_inclusive_and_stops_at_hour_23() {
    let mut store = setup();
    store.insert(&expense(1, "Food", "2025-07-31 23:30:00")).unwrap();
    store.insert(&expense(2, "Food", "2025-08-01 00:00:00")).unwrap();
    store.insert(&expense(3, "Food", "2025-08-31 23:00:00")).unwrap();
    store.insert(&expense(4, "Food", "2025-08-31 23:30:00")).unwrap();
    store.insert(&expense(5, "Food", "2025-09-01 00:00:00")).unwrap();

    let (start, end) = month_bounds(dt("2025-08-15 12:00:00"));
    let amounts: Vec<_> = store
        .in_range(start, end)
        .unwrap()
        .into_iter()
        .map(|t| t.amount)
        .collect();
    assert_eq!(amounts, vec![Decimal::from(3), Decimal::from(2)]);
}

#[test]
fn amounts_keep_their_decimals() {
    let mut store = setup();
    let mut t = expense(0, INCOME_CATEGORY, "2025-08-01 08:00:00");
    t.amount = Decimal::new(123_456, 2);
    t.is_expense = false;
    let id = store.insert(&t).unwrap();
    let back = store.get(id).unwrap().unwrap();
    assert_eq!(back.amount, Decimal::new(123_456, 2));
    assert!(!back.is_expense);
}

#[test]
fn subscription_redelivers_only_after_changes() {
    let mut store = setup();
    let mut feed = store.subscribe_all();
    assert_eq!(feed.poll(&store).unwrap(), Some(vec![]));
    assert_eq!(feed.poll(&store).unwrap(), None);

    let id = store.insert(&expense(9, "Food", "2025-08-02 09:00:00")).unwrap();
    let snap = feed.poll(&store).unwrap().unwrap();
    assert_eq!(snap.len(), 1);
    assert_eq!(feed.poll(&store).unwrap(), None);

    store.delete(id).unwrap();
    assert_eq!(feed.poll(&store).unwrap(), Some(vec![]));
}

#[test]
fn range_subscription_sees_only_its_month() {
    let mut store = setup();
    let (start, end) = month_bounds(dt("2025-08-15 12:00:00"));
    let mut feed = store.subscribe_range(start, end);
    feed.poll(&store).unwrap();

    store.insert(&expense(9, "Food", "2025-09-02 09:00:00")).unwrap();
    // table changed, so a fresh (still empty) snapshot is delivered
    assert_eq!(feed.poll(&store).unwrap(), Some(vec![]));
}

#[test]
fn subscription_notices_writes_from_another_connection() {
    let file = NamedTempFile::new().unwrap();
    let reader = TransactionStore::new(db::open_or_init(Some(file.path())).unwrap());
    let mut writer = TransactionStore::new(db::open_or_init(Some(file.path())).unwrap());

    let mut feed = reader.subscribe_all();
    assert_eq!(feed.poll(&reader).unwrap(), Some(vec![]));
    assert_eq!(feed.poll(&reader).unwrap(), None);

    writer.insert(&expense(4, "Pets", "2025-08-05 18:00:00")).unwrap();
    let snap = feed.poll(&reader).unwrap().unwrap();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].category, "Pets");
}
