// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use crate::utils::{fmt_epoch_ms, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ledger, sub),
        _ => Ok(()),
    }
}

fn list<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let reminders = ledger.payment_reminders();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &reminders)? {
        return Ok(());
    }
    let data = reminders
        .iter()
        .map(|r| {
            let repeat = if r.repeat_interval > 0 {
                format!("{} every {} {}", r.repeat_type, r.repeat_interval, r.repeat_unit)
            } else {
                r.repeat_type.clone()
            };
            vec![
                r.title.clone(),
                r.category.clone(),
                r.amount.as_ref().map(fmt_money).unwrap_or_default(),
                r.currency_code.clone(),
                fmt_epoch_ms(r.next_due_date.or(r.due_date)),
                repeat,
                r.status.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Title", "Category", "Amount", "CCY", "Next due", "Repeat", "Status"],
            data
        )
    );
    Ok(())
}
