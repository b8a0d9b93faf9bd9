// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{LedgerStore, LoadSummary};
use crate::store::KeyValueStore;
use crate::utils::pretty_table;
use anyhow::{Context, Result};

pub fn handle<S: KeyValueStore>(
    ledger: &mut LedgerStore<S>,
    m: &clap::ArgMatches,
) -> Result<LoadSummary> {
    let path = m
        .get_one::<String>("path")
        .map(|s| s.trim())
        .context("--path is required")?;
    let bytes = std::fs::read(path).with_context(|| format!("Read archive {}", path))?;
    let summary = ledger
        .load_archive(&bytes)
        .with_context(|| format!("Load archive {}", path))?;

    println!("Loaded {}", path);
    println!(
        "{}",
        pretty_table(
            &["Collection", "Records"],
            vec![
                vec!["Transactions".into(), summary.transactions.to_string()],
                vec!["Budgets".into(), summary.budgets.to_string()],
                vec![
                    "Payment reminders".into(),
                    summary.payment_reminders.to_string()
                ],
            ],
        )
    );
    Ok(summary)
}
