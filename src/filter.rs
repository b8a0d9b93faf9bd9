// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;

pub const ALL: &str = "ALL";

/// Criteria for listing transactions. `None` or "ALL" disables a criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub r#type: Option<String>,
    pub category_id: Option<String>,
    pub payment_method: Option<String>,
    pub search: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

fn selects(criterion: &Option<String>, value: &str) -> bool {
    match criterion.as_deref() {
        None | Some("") | Some(ALL) => true,
        Some(want) => want == value,
    }
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if !t.is_active() {
            return false;
        }
        if !selects(&self.r#type, t.r#type.as_str())
            || !selects(&self.category_id, &t.category_id)
            || !selects(&self.payment_method, &t.payment_method)
        {
            return false;
        }
        if let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let term = term.to_lowercase();
            if !t.description.to_lowercase().contains(&term)
                && !t.notes.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if self.start.is_some() || self.end.is_some() {
            let Some(date) = t.transaction_date else {
                return false;
            };
            if self.start.is_some_and(|s| date < s) || self.end.is_some_and(|e| date > e) {
                return false;
            }
        }
        true
    }
}

/// Matching active transactions, in input order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}
