// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::snapshot_or_hint;
use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let Some(snapshot) = snapshot_or_hint(ledger) else {
        return Ok(());
    };
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &snapshot.budget_tracking)? {
        return Ok(());
    }

    let data = snapshot
        .budget_tracking
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                if b.category.is_empty() {
                    b.category_id.clone()
                } else {
                    b.category.clone()
                },
                b.period.clone(),
                fmt_money(&b.budget_amount),
                fmt_money(&b.spent_amount),
                format!("{}%", fmt_money(&b.percentage_used)),
                fmt_money(&b.remaining),
                b.status.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Budget", "Category", "Period", "Amount", "Spent", "Used", "Remaining", "Status"
            ],
            data
        )
    );
    Ok(())
}
