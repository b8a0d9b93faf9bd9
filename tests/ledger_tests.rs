// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::*;
use moneylens::LedgerStore;
use moneylens::db;
use moneylens::filter::TransactionFilter;
use moneylens::ledger::{BUDGETS_KEY, REMINDERS_KEY, TRANSACTIONS_KEY};
use moneylens::models::Budget;
use moneylens::store::{KeyValueStore, MemoryStore, SqliteStore};
use tempfile::tempdir;

#[test]
fn fresh_store_starts_empty() {
    let ledger = LedgerStore::open(MemoryStore::new());
    assert!(!ledger.is_loaded());
    assert!(ledger.transactions().is_empty());
    assert!(ledger.analytics().is_none());
}

#[test]
fn load_archive_installs_and_persists() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    let summary = ledger.load_archive(&sample_archive()).unwrap();
    assert_eq!(summary.transactions, 5);
    assert_eq!(summary.budgets, 1);
    assert_eq!(summary.payment_reminders, 1);
    assert!(ledger.is_loaded());
    assert_eq!(ledger.active_transactions().len(), 4);

    let snapshot = ledger.analytics().unwrap();
    assert_eq!(snapshot.total_expense, dec("190"));
    assert_eq!(snapshot.total_income, dec("1000"));
    assert_eq!(snapshot.budget_tracking[0].spent_amount, dec("150"));

    let store = ledger.store();
    assert_eq!(store.len(), 3);
    assert!(store.get(TRANSACTIONS_KEY).unwrap().is_some());
    assert!(store.get(REMINDERS_KEY).unwrap().is_some());
}

#[test]
fn reopening_reconciles_persisted_budgets_again() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.load_archive(&sample_archive()).unwrap();
    let mut store = ledger.store().clone();

    let mut budgets: Vec<Budget> =
        serde_json::from_str(&store.get(BUDGETS_KEY).unwrap().unwrap()).unwrap();
    budgets[0].spent_amount = "1.00,INR".to_string();
    budgets[0].status = "ON_TRACK".to_string();
    store
        .set(BUDGETS_KEY, &serde_json::to_string(&budgets).unwrap())
        .unwrap();

    let reopened = LedgerStore::open(store);
    assert!(reopened.is_loaded());
    assert_eq!(reopened.transactions().len(), 5);
    assert_eq!(reopened.payment_reminders().len(), 1);
    assert_eq!(reopened.budgets()[0].spent_amount, "150.00,INR");
    assert_eq!(reopened.budgets()[0].status, "OVER_BUDGET");
    assert!(reopened.analytics().is_some());
}

#[test]
fn corrupted_slots_are_discarded() {
    let mut store = MemoryStore::new();
    store.set(TRANSACTIONS_KEY, "{not json").unwrap();
    store.set(BUDGETS_KEY, "[]").unwrap();
    store.set(REMINDERS_KEY, "[]").unwrap();

    let ledger = LedgerStore::open(store);
    assert!(!ledger.is_loaded());
    assert!(ledger.transactions().is_empty());
    assert!(ledger.store().is_empty());
}

#[test]
fn restore_requires_transactions_and_budgets() {
    let mut store = MemoryStore::new();
    store.set(TRANSACTIONS_KEY, "[]").unwrap();
    let ledger = LedgerStore::open(store);
    assert!(!ledger.is_loaded());
}

#[test]
fn failed_load_keeps_previous_state() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.load_archive(&sample_archive()).unwrap();
    let before = ledger.analytics().cloned();

    assert!(ledger.load_archive(b"PK\x03\x04 truncated").is_err());
    assert_eq!(ledger.transactions().len(), 5);
    assert_eq!(ledger.budgets().len(), 1);
    assert_eq!(ledger.analytics().cloned(), before);
}

#[test]
fn archive_without_transactions_is_not_persisted() {
    let budgets = format!(
        "{}\n{}",
        BUDGET_HEADER,
        budget_row("b1", "Groceries", "Food", "100.00,INR", "80.00,INR")
    );
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger
        .load_archive(&build_zip(&[("budgets.csv", &budgets)]))
        .unwrap();
    assert!(ledger.is_loaded());
    assert_eq!(ledger.budgets()[0].spent_amount, "0.00,INR");
    assert!(ledger.store().is_empty());
}

#[test]
fn archive_without_transactions_drops_previous_slots() {
    let budgets = format!(
        "{}\n{}",
        BUDGET_HEADER,
        budget_row("b1", "Groceries", "Food", "100.00,INR", "0.00,INR")
    );
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.load_archive(&sample_archive()).unwrap();
    assert_eq!(ledger.store().len(), 3);

    ledger
        .load_archive(&build_zip(&[("budgets.csv", &budgets)]))
        .unwrap();
    assert!(ledger.transactions().is_empty());
    assert!(ledger.store().is_empty());

    let reopened = LedgerStore::open(ledger.store().clone());
    assert!(!reopened.is_loaded());
    assert!(reopened.transactions().is_empty());
}

#[test]
fn clear_empties_memory_and_storage() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.load_archive(&sample_archive()).unwrap();
    ledger.clear();
    assert!(!ledger.is_loaded());
    assert!(ledger.transactions().is_empty());
    assert!(ledger.budgets().is_empty());
    assert!(ledger.payment_reminders().is_empty());
    assert!(ledger.analytics().is_none());
    assert!(ledger.store().is_empty());
}

#[test]
fn refresh_keeps_snapshot_consistent() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.refresh_analytics();
    assert!(ledger.analytics().is_none());

    ledger.load_archive(&sample_archive()).unwrap();
    let before = ledger.analytics().cloned();
    ledger.refresh_analytics();
    assert_eq!(ledger.analytics().cloned(), before);
}

#[test]
fn filter_selects_active_transactions() {
    let mut ledger = LedgerStore::open(MemoryStore::new());
    ledger.load_archive(&sample_archive()).unwrap();

    let lunch = ledger.filter_transactions(&TransactionFilter {
        r#type: Some("EXPENSE".into()),
        search: Some("LUNCH".into()),
        ..Default::default()
    });
    assert_eq!(lunch.len(), 2);

    let all = ledger.filter_transactions(&TransactionFilter {
        r#type: Some("ALL".into()),
        ..Default::default()
    });
    assert_eq!(all.len(), 4);

    let march_5_on = ledger.filter_transactions(&TransactionFilter {
        start: Some(ms(2024, 3, 5)),
        end: Some(ms(2024, 3, 7)),
        ..Default::default()
    });
    let ids: Vec<&str> = march_5_on.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3"]);
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("ledger.sqlite");
    {
        let store = SqliteStore::new(db::open_or_init(&path).unwrap()).unwrap();
        let mut ledger = LedgerStore::open(store);
        ledger.load_archive(&sample_archive()).unwrap();
    }
    let store = SqliteStore::new(db::open_or_init(&path).unwrap()).unwrap();
    let mut ledger = LedgerStore::open(store);
    assert_eq!(ledger.transactions().len(), 5);
    assert_eq!(ledger.budgets()[0].status, "OVER_BUDGET");

    ledger.clear();
    assert!(ledger.store().get(TRANSACTIONS_KEY).unwrap().is_none());
}

#[test]
fn sqlite_store_upserts() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
