// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Recomputes each budget's spent amount and status from the transactions.
//!
//! Whatever `spentAmount`/`status` an export carries is stale; the values here
//! are the only ones that should be shown.

use crate::diagnostics::{BudgetMatch, Diagnostics};
use crate::models::{Budget, BudgetStatus, Transaction};
use crate::utils::{extract_currency_code, format_budget_amount, parse_budget_amount};
use rust_decimal::Decimal;

/// Trimmed, lower-cased, underscores replaced with spaces.
pub fn normalize_category(s: &str) -> String {
    s.trim().to_lowercase().replace('_', " ")
}

/// `spent > budget` wins over `spent > 0.8 * budget`; a zero budget with any
/// spend is therefore over budget.
pub fn classify(spent: Decimal, budget: Decimal) -> BudgetStatus {
    let warning_at = budget * Decimal::new(8, 1);
    if spent > budget {
        BudgetStatus::OverBudget
    } else if spent > warning_at {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    }
}

pub fn reconcile(budgets: &[Budget], transactions: &[Transaction]) -> Vec<Budget> {
    reconcile_with(budgets, transactions, &())
}

pub fn reconcile_with(
    budgets: &[Budget],
    transactions: &[Transaction],
    diag: &dyn Diagnostics,
) -> Vec<Budget> {
    let expenses: Vec<(String, Decimal)> = transactions
        .iter()
        .filter(|t| t.is_active() && t.is_expense() && !t.category_id.is_empty())
        .map(|t| (normalize_category(&t.category_id), t.amount_or_zero()))
        .collect();

    budgets
        .iter()
        .map(|budget| {
            if budget.category_id.trim().is_empty() {
                diag.budget_skipped(budget);
                return budget.clone();
            }
            let category = normalize_category(&budget.category_id);
            let mut matched = 0;
            let mut spent = Decimal::ZERO;
            for (_, amount) in expenses.iter().filter(|(c, _)| *c == category) {
                matched += 1;
                spent = spent.saturating_add(*amount);
            }

            let amount = parse_budget_amount(&budget.budget_amount);
            let currency = extract_currency_code(&budget.budget_amount);
            let status = classify(spent, amount);
            diag.budget_reconciled(&BudgetMatch {
                name: budget.name.clone(),
                normalized_category: category,
                matched,
                budget: amount,
                spent,
                status,
            });

            Budget {
                spent_amount: format_budget_amount(spent, &currency),
                status: status.as_str().to_string(),
                ..budget.clone()
            }
        })
        .collect()
}
