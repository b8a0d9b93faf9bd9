// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Income,
    Expense,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Other(s) => s,
        }
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Other(String::new())
    }
}

impl From<&str> for TransactionType {
    fn from(s: &str) -> Self {
        match s {
            "INCOME" => TransactionType::Income,
            "EXPENSE" => TransactionType::Expense,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        TransactionType::from(s.as_str())
    }
}

impl From<TransactionType> for String {
    fn from(t: TransactionType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "ON_TRACK",
            BudgetStatus::Warning => "WARNING",
            BudgetStatus::OverBudget => "OVER_BUDGET",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamps are epoch milliseconds; integer flags are 0/1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Option<Decimal>,
    pub currency_code: String,
    pub exchange_rate: Option<Decimal>,
    pub r#type: TransactionType,
    pub category_id: String,
    pub subcategory: String,
    pub description: String,
    pub notes: String,
    pub transaction_date: Option<i64>,
    pub transaction_time: Option<i64>,
    pub account_name: String,
    pub payment_method: String,
    pub reference_number: String,
    pub location: String,
    pub tags: String,
    pub is_recurring: i64,
    pub recurring_pattern: String,
    pub receipt_image_path: String,
    pub is_tax_deductible: i64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub is_deleted: i64,
}

impl Transaction {
    pub fn is_active(&self) -> bool {
        self.is_deleted == 0
    }

    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }
}

/// `budget_amount` and `spent_amount` use the composite "<decimal>,<currency>" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub category_name: String,
    pub budget_amount: String,
    pub spent_amount: String,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub is_active: i64,
    pub is_recurring: i64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReminder {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub amount: Option<Decimal>,
    pub currency_code: String,
    pub due_date: Option<i64>,
    pub due_time: String,
    pub repeat_type: String,
    pub repeat_interval: i64,
    pub repeat_unit: String,
    pub next_due_date: Option<i64>,
    pub notification_time: i64,
    pub notification_enabled: i64,
    pub notification_id: i64,
    pub status: String,
    pub is_active: i64,
    pub snooze_until: Option<i64>,
    pub notes: String,
    pub payment_method: String,
    pub auto_create_transaction: i64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub last_notified_at: Option<i64>,
    pub completion_count: i64,
}
