// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::*;
use moneylens::DecodeError;
use moneylens::archive::{load, read_archive};
use moneylens::decoder::RecordKind;
use moneylens::diagnostics::Diagnostics;
use std::cell::RefCell;

#[test]
fn load_decodes_and_reconciles() {
    let contents = load(&sample_archive(), &()).unwrap();
    assert_eq!(contents.transactions.len(), 5);
    assert_eq!(contents.payment_reminders.len(), 1);
    assert_eq!(contents.budgets.len(), 1);
    // Food 100 + food 50; the deleted 900 row is ignored.
    assert_eq!(contents.budgets[0].spent_amount, "150.00,INR");
    assert_eq!(contents.budgets[0].status, "OVER_BUDGET");
}

#[test]
fn read_archive_leaves_budgets_as_exported() {
    let contents = read_archive(&sample_archive(), &()).unwrap();
    assert_eq!(contents.budgets[0].spent_amount, "0.00,INR");
    assert_eq!(contents.budgets[0].status, "ON_TRACK");
}

#[test]
fn unrelated_members_are_ignored() {
    let budgets = format!(
        "{}\n{}",
        BUDGET_HEADER,
        budget_row("b1", "Groceries", "Food", "100.00,INR", "0.00,INR")
    );
    let history = format!(
        "{}\n{}",
        BUDGET_HEADER,
        budget_row("h1", "Old", "Food", "1.00,INR", "0.00,INR")
    );
    let bytes = build_zip(&[
        ("budget_history/budgets.csv", &history),
        ("budgets.csv", &budgets),
        ("transactions.csv.bak", "garbage"),
        ("readme.txt", "hello"),
        ("categories.csv", "id,name\n1,Food"),
    ]);
    let contents = load(&bytes, &()).unwrap();
    assert!(contents.transactions.is_empty());
    assert!(contents.payment_reminders.is_empty());
    assert_eq!(contents.budgets.len(), 1);
    assert_eq!(contents.budgets[0].id, "b1");
    assert_eq!(contents.budgets[0].spent_amount, "0.00,INR");
}

#[test]
fn empty_archive_yields_empty_collections() {
    let contents = load(&build_zip(&[]), &()).unwrap();
    assert!(contents.transactions.is_empty());
    assert!(contents.budgets.is_empty());
    assert!(contents.payment_reminders.is_empty());
}

#[test]
fn corrupt_bytes_are_a_decode_error() {
    let err = load(b"definitely not a zip archive", &()).unwrap_err();
    assert!(matches!(err, DecodeError::Archive(_)));
    assert!(err.to_string().starts_with("Failed to process ZIP file"));
}

#[derive(Default)]
struct Recorder {
    decoded: RefCell<Vec<(String, RecordKind, usize)>>,
    ignored: RefCell<Vec<String>>,
    skipped: RefCell<Vec<(RecordKind, usize, usize)>>,
}

impl Diagnostics for Recorder {
    fn member_decoded(&self, name: &str, kind: RecordKind, records: usize) {
        self.decoded.borrow_mut().push((name.to_string(), kind, records));
    }

    fn member_ignored(&self, name: &str) {
        self.ignored.borrow_mut().push(name.to_string());
    }

    fn row_skipped(&self, kind: RecordKind, row: usize, fields: usize) {
        self.skipped.borrow_mut().push((kind, row, fields));
    }
}

#[test]
fn diagnostics_report_members_and_skipped_rows() {
    let transactions = format!(
        "{}\n{}\nshort,row",
        TX_HEADER,
        tx_row("t1", "5", "EXPENSE", "Food", "Tea", ms(2024, 1, 2), 0)
    );
    let bytes = build_zip(&[
        ("transactions.csv", &transactions),
        ("accounts.csv", "id\n1"),
    ]);
    let rec = Recorder::default();
    let contents = read_archive(&bytes, &rec).unwrap();
    assert_eq!(contents.transactions.len(), 1);
    assert_eq!(
        *rec.decoded.borrow(),
        vec![("transactions.csv".to_string(), RecordKind::Transactions, 1)]
    );
    assert_eq!(*rec.ignored.borrow(), vec!["accounts.csv".to_string()]);
    assert_eq!(*rec.skipped.borrow(), vec![(RecordKind::Transactions, 2, 2)]);
}
