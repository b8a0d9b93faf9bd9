// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decoder::RecordKind;
use crate::models::{Budget, BudgetStatus};
use log::debug;
use rust_decimal::Decimal;

/// Outcome of matching one budget against the transaction collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetMatch {
    pub name: String,
    pub normalized_category: String,
    pub matched: usize,
    pub budget: Decimal,
    pub spent: Decimal,
    pub status: BudgetStatus,
}

/// Observer for the loader and reconciler. Every hook defaults to a no-op.
pub trait Diagnostics {
    fn member_decoded(&self, _name: &str, _kind: RecordKind, _records: usize) {}

    fn member_ignored(&self, _name: &str) {}

    fn row_skipped(&self, _kind: RecordKind, _row: usize, _fields: usize) {}

    fn budget_skipped(&self, _budget: &Budget) {}

    fn budget_reconciled(&self, _outcome: &BudgetMatch) {}
}

impl Diagnostics for () {}

/// Forwards every event to `log::debug!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn member_decoded(&self, name: &str, kind: RecordKind, records: usize) {
        debug!("Parsed {} {} from {}", records, kind.label(), name);
    }

    fn member_ignored(&self, name: &str) {
        debug!("Ignoring archive member {}", name);
    }

    fn row_skipped(&self, kind: RecordKind, row: usize, fields: usize) {
        debug!(
            "Skipped {} row {}: {} fields, expected {}",
            kind.label(),
            row,
            fields,
            kind.field_count()
        );
    }

    fn budget_skipped(&self, budget: &Budget) {
        debug!("Skipping budget with no categoryId: {}", budget.name);
    }

    fn budget_reconciled(&self, outcome: &BudgetMatch) {
        debug!(
            "Budget '{}' [{}]: {} matched, spent {} of {} -> {}",
            outcome.name,
            outcome.normalized_category,
            outcome.matched,
            outcome.spent,
            outcome.budget,
            outcome.status
        );
    }
}
