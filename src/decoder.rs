// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Positional CSV layouts for the three record kinds found in an export.
//!
//! A member may start with a `CSV_VERSION...` row ahead of its header; both are
//! skipped. Rows shorter than the layout are dropped, and numeric fields that
//! fail to parse fall back to `0` or `None`.

use crate::diagnostics::Diagnostics;
use crate::models::{Budget, PaymentReminder, Transaction};
use crate::utils::{parse_decimal, parse_int};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::warn;
use rust_decimal::Decimal;

pub const VERSION_MARKER: &str = "CSV_VERSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Transactions,
    Budgets,
    PaymentReminders,
}

impl RecordKind {
    /// Dispatch on an archive member name by substring.
    pub fn from_member_name(name: &str) -> Option<Self> {
        if name.contains("transactions.csv") {
            Some(RecordKind::Transactions)
        } else if name.contains("budgets.csv") && !name.contains("budget_history") {
            Some(RecordKind::Budgets)
        } else if name.contains("payment_reminders.csv") {
            Some(RecordKind::PaymentReminders)
        } else {
            None
        }
    }

    pub fn field_count(self) -> usize {
        match self {
            RecordKind::Transactions => Transaction::HEADERS.len(),
            RecordKind::Budgets => Budget::HEADERS.len(),
            RecordKind::PaymentReminders => PaymentReminder::HEADERS.len(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Transactions => "transactions",
            RecordKind::Budgets => "budgets",
            RecordKind::PaymentReminders => "payment reminders",
        }
    }
}

/// Decoded rows of one archive member, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedMember {
    Transactions(Vec<Transaction>),
    Budgets(Vec<Budget>),
    PaymentReminders(Vec<PaymentReminder>),
}

impl DecodedMember {
    pub fn len(&self) -> usize {
        match self {
            DecodedMember::Transactions(v) => v.len(),
            DecodedMember::Budgets(v) => v.len(),
            DecodedMember::PaymentReminders(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A record with a fixed positional CSV layout.
pub trait CsvRecord: Sized {
    const KIND: RecordKind;
    const HEADERS: &'static [&'static str];

    /// Callers guarantee `row.len() >= HEADERS.len()`.
    fn from_fields(row: &StringRecord) -> Self;

    fn to_fields(&self) -> Vec<String>;

    fn decode_row(row: &StringRecord) -> Option<Self> {
        if row.len() < Self::HEADERS.len() {
            return None;
        }
        Some(Self::from_fields(row))
    }
}

pub fn decode_member(kind: RecordKind, text: &str, diag: &dyn Diagnostics) -> DecodedMember {
    match kind {
        RecordKind::Transactions => DecodedMember::Transactions(decode_records(text, diag)),
        RecordKind::Budgets => DecodedMember::Budgets(decode_records(text, diag)),
        RecordKind::PaymentReminders => {
            DecodedMember::PaymentReminders(decode_records(text, diag))
        }
    }
}

pub fn decode_records<R: CsvRecord>(text: &str, diag: &dyn Diagnostics) -> Vec<R> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut skip = 1;
    let mut out = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Unreadable {} row {}: {}", R::KIND.label(), idx, e);
                diag.row_skipped(R::KIND, idx, 0);
                continue;
            }
        };
        if idx == 0 && row.get(0).is_some_and(|f| f.starts_with(VERSION_MARKER)) {
            skip = 2;
        }
        if idx < skip {
            continue;
        }
        match R::decode_row(&row) {
            Some(rec) => out.push(rec),
            None => diag.row_skipped(R::KIND, idx, row.len()),
        }
    }
    out
}

/// Header row followed by one row per record, in the canonical layout.
pub fn encode_records<R: CsvRecord>(records: &[R]) -> Result<String, csv::Error> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(R::HEADERS)?;
    for rec in records {
        wtr.write_record(rec.to_fields())?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

fn text(row: &StringRecord, i: usize) -> String {
    row.get(i).unwrap_or_default().to_string()
}

fn decimal(row: &StringRecord, i: usize) -> Option<Decimal> {
    row.get(i).and_then(parse_decimal)
}

fn int_or_zero(row: &StringRecord, i: usize) -> i64 {
    row.get(i).and_then(parse_int).unwrap_or(0)
}

fn timestamp(row: &StringRecord, i: usize) -> Option<i64> {
    row.get(i).and_then(parse_int)
}

fn opt_to_string<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl CsvRecord for Transaction {
    const KIND: RecordKind = RecordKind::Transactions;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "userId",
        "amount",
        "currencyCode",
        "exchangeRate",
        "type",
        "categoryId",
        "subcategory",
        "description",
        "notes",
        "transactionDate",
        "transactionTime",
        "accountName",
        "paymentMethod",
        "referenceNumber",
        "location",
        "tags",
        "isRecurring",
        "recurringPattern",
        "receiptImagePath",
        "isTaxDeductible",
        "createdAt",
        "updatedAt",
        "isDeleted",
    ];

    fn from_fields(row: &StringRecord) -> Self {
        Transaction {
            id: text(row, 0),
            user_id: text(row, 1),
            amount: decimal(row, 2),
            currency_code: text(row, 3),
            exchange_rate: decimal(row, 4),
            r#type: text(row, 5).into(),
            category_id: text(row, 6),
            subcategory: text(row, 7),
            description: text(row, 8),
            notes: text(row, 9),
            transaction_date: timestamp(row, 10),
            transaction_time: timestamp(row, 11),
            account_name: text(row, 12),
            payment_method: text(row, 13),
            reference_number: text(row, 14),
            location: text(row, 15),
            tags: text(row, 16),
            is_recurring: int_or_zero(row, 17),
            recurring_pattern: text(row, 18),
            receipt_image_path: text(row, 19),
            is_tax_deductible: int_or_zero(row, 20),
            created_at: timestamp(row, 21),
            updated_at: timestamp(row, 22),
            is_deleted: int_or_zero(row, 23),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_id.clone(),
            opt_to_string(&self.amount),
            self.currency_code.clone(),
            opt_to_string(&self.exchange_rate),
            self.r#type.to_string(),
            self.category_id.clone(),
            self.subcategory.clone(),
            self.description.clone(),
            self.notes.clone(),
            opt_to_string(&self.transaction_date),
            opt_to_string(&self.transaction_time),
            self.account_name.clone(),
            self.payment_method.clone(),
            self.reference_number.clone(),
            self.location.clone(),
            self.tags.clone(),
            self.is_recurring.to_string(),
            self.recurring_pattern.clone(),
            self.receipt_image_path.clone(),
            self.is_tax_deductible.to_string(),
            opt_to_string(&self.created_at),
            opt_to_string(&self.updated_at),
            self.is_deleted.to_string(),
        ]
    }
}

impl CsvRecord for Budget {
    const KIND: RecordKind = RecordKind::Budgets;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "userId",
        "name",
        "description",
        "categoryId",
        "categoryName",
        "budgetAmount",
        "spentAmount",
        "period",
        "startDate",
        "endDate",
        "status",
        "isActive",
        "isRecurring",
        "createdAt",
        "updatedAt",
    ];

    fn from_fields(row: &StringRecord) -> Self {
        Budget {
            id: text(row, 0),
            user_id: text(row, 1),
            name: text(row, 2),
            description: text(row, 3),
            category_id: text(row, 4),
            category_name: text(row, 5),
            budget_amount: text(row, 6),
            spent_amount: text(row, 7),
            period: text(row, 8),
            start_date: text(row, 9),
            end_date: text(row, 10),
            status: text(row, 11),
            is_active: int_or_zero(row, 12),
            is_recurring: int_or_zero(row, 13),
            created_at: timestamp(row, 14),
            updated_at: timestamp(row, 15),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.category_id.clone(),
            self.category_name.clone(),
            self.budget_amount.clone(),
            self.spent_amount.clone(),
            self.period.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.status.clone(),
            self.is_active.to_string(),
            self.is_recurring.to_string(),
            opt_to_string(&self.created_at),
            opt_to_string(&self.updated_at),
        ]
    }
}

impl CsvRecord for PaymentReminder {
    const KIND: RecordKind = RecordKind::PaymentReminders;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "userId",
        "title",
        "category",
        "amount",
        "currencyCode",
        "dueDate",
        "dueTime",
        "repeatType",
        "repeatInterval",
        "repeatUnit",
        "nextDueDate",
        "notificationTime",
        "notificationEnabled",
        "notificationId",
        "status",
        "isActive",
        "snoozeUntil",
        "notes",
        "paymentMethod",
        "autoCreateTransaction",
        "createdAt",
        "updatedAt",
        "lastNotifiedAt",
        "completionCount",
    ];

    fn from_fields(row: &StringRecord) -> Self {
        PaymentReminder {
            id: text(row, 0),
            user_id: text(row, 1),
            title: text(row, 2),
            category: text(row, 3),
            amount: decimal(row, 4),
            currency_code: text(row, 5),
            due_date: timestamp(row, 6),
            due_time: text(row, 7),
            repeat_type: text(row, 8),
            repeat_interval: int_or_zero(row, 9),
            repeat_unit: text(row, 10),
            next_due_date: timestamp(row, 11),
            notification_time: int_or_zero(row, 12),
            notification_enabled: int_or_zero(row, 13),
            notification_id: int_or_zero(row, 14),
            status: text(row, 15),
            is_active: int_or_zero(row, 16),
            snooze_until: timestamp(row, 17),
            notes: text(row, 18),
            payment_method: text(row, 19),
            auto_create_transaction: int_or_zero(row, 20),
            created_at: timestamp(row, 21),
            updated_at: timestamp(row, 22),
            last_notified_at: timestamp(row, 23),
            completion_count: int_or_zero(row, 24),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_id.clone(),
            self.title.clone(),
            self.category.clone(),
            opt_to_string(&self.amount),
            self.currency_code.clone(),
            opt_to_string(&self.due_date),
            self.due_time.clone(),
            self.repeat_type.clone(),
            self.repeat_interval.to_string(),
            self.repeat_unit.clone(),
            opt_to_string(&self.next_due_date),
            self.notification_time.to_string(),
            self.notification_enabled.to_string(),
            self.notification_id.to_string(),
            self.status.clone(),
            self.is_active.to_string(),
            opt_to_string(&self.snooze_until),
            self.notes.clone(),
            self.payment_method.clone(),
            self.auto_create_transaction.to_string(),
            opt_to_string(&self.created_at),
            opt_to_string(&self.updated_at),
            opt_to_string(&self.last_notified_at),
            self.completion_count.to_string(),
        ]
    }
}
