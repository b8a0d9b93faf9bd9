// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use moneylens::models::{Budget, Transaction};
use rust_decimal::Decimal;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

pub const TX_HEADER: &str = "id,userId,amount,currencyCode,exchangeRate,type,categoryId,subcategory,description,notes,transactionDate,transactionTime,accountName,paymentMethod,referenceNumber,location,tags,isRecurring,recurringPattern,receiptImagePath,isTaxDeductible,createdAt,updatedAt,isDeleted";
pub const BUDGET_HEADER: &str = "id,userId,name,description,categoryId,categoryName,budgetAmount,spentAmount,period,startDate,endDate,status,isActive,isRecurring,createdAt,updatedAt";
pub const REMINDER_HEADER: &str = "id,userId,title,category,amount,currencyCode,dueDate,dueTime,repeatType,repeatInterval,repeatUnit,nextDueDate,notificationTime,notificationEnabled,notificationId,status,isActive,snoozeUntil,notes,paymentMethod,autoCreateTransaction,createdAt,updatedAt,lastNotifiedAt,completionCount";

pub fn ms(y: i32, m: u32, d: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0)
        .unwrap()
        .timestamp_millis()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn expense(category: &str, amount: &str, date: Option<i64>) -> Transaction {
    Transaction {
        amount: Some(dec(amount)),
        r#type: "EXPENSE".into(),
        category_id: category.to_string(),
        transaction_date: date,
        ..Default::default()
    }
}

pub fn income(amount: &str, date: Option<i64>) -> Transaction {
    Transaction {
        amount: Some(dec(amount)),
        r#type: "INCOME".into(),
        category_id: "Salary".to_string(),
        transaction_date: date,
        ..Default::default()
    }
}

pub fn budget(name: &str, category: &str, amount: &str) -> Budget {
    Budget {
        name: name.to_string(),
        category_id: category.to_string(),
        category_name: category.to_string(),
        budget_amount: amount.to_string(),
        spent_amount: "0.00,INR".to_string(),
        period: "MONTHLY".to_string(),
        status: "ON_TRACK".to_string(),
        is_active: 1,
        ..Default::default()
    }
}

/// One 24-field transaction row.
pub fn tx_row(
    id: &str,
    amount: &str,
    kind: &str,
    category: &str,
    description: &str,
    date: i64,
    deleted: u8,
) -> String {
    format!(
        "{id},u1,{amount},INR,,{kind},{category},,{description},,{date},,Wallet,UPI,,,,0,,,0,{date},{date},{deleted}"
    )
}

/// One 16-field budget row.
pub fn budget_row(id: &str, name: &str, category: &str, amount: &str, spent: &str) -> String {
    format!(
        "{id},u1,{name},,{category},{category},\"{amount}\",\"{spent}\",MONTHLY,,,ON_TRACK,1,0,1700000000000,1700000000000"
    )
}

/// One 25-field payment reminder row.
pub fn reminder_row(id: &str, title: &str) -> String {
    format!(
        "{id},u1,{title},Bills,499.00,INR,1700000000000,09:00,MONTHLY,1,MONTH,1702592000000,0,1,7,PENDING,1,,,UPI,0,1700000000000,1700000000000,,3"
    )
}

pub fn build_zip(members: &[(&str, &str)]) -> Vec<u8> {
    let mut zw = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();
    for (name, body) in members {
        if name.ends_with('/') {
            zw.add_directory(*name, opts).unwrap();
        } else {
            zw.start_file(*name, opts).unwrap();
            zw.write_all(body.as_bytes()).unwrap();
        }
    }
    zw.finish().unwrap().into_inner()
}

/// A small export: three expenses, one income, one deleted expense,
/// one food budget and one reminder.
pub fn sample_archive() -> Vec<u8> {
    let transactions = [
        "CSV_VERSION,1".to_string(),
        TX_HEADER.to_string(),
        tx_row("t1", "100", "EXPENSE", "Food", "Lunch", ms(2024, 3, 4), 0),
        tx_row("t2", "50", "EXPENSE", "food", "Lunch", ms(2024, 3, 5), 0),
        tx_row("t3", "40", "EXPENSE", "Travel", "Cab", ms(2024, 3, 6), 0),
        tx_row("t4", "1000", "INCOME", "Salary", "Pay", ms(2024, 3, 1), 0),
        tx_row("t5", "900", "EXPENSE", "Food", "Party", ms(2024, 3, 7), 1),
    ]
    .join("\n");
    let budgets = [
        BUDGET_HEADER.to_string(),
        budget_row("b1", "Groceries", "FOOD", "100.00,INR", "0.00,INR"),
    ]
    .join("\n");
    let reminders = [REMINDER_HEADER.to_string(), reminder_row("r1", "Rent")].join("\n");
    build_zip(&[
        ("export/", ""),
        ("export/transactions.csv", &transactions),
        ("export/budgets.csv", &budgets),
        ("export/payment_reminders.csv", &reminders),
    ])
}
