// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decoder::{CsvRecord, encode_records};
use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use anyhow::{Context, Result, bail};
use serde::Serialize;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export(ledger.transactions(), "transactions", sub),
        Some(("budgets", sub)) => export(ledger.budgets(), "budgets", sub),
        Some(("reminders", sub)) => export(ledger.payment_reminders(), "payment reminders", sub),
        _ => Ok(()),
    }
}

fn export<R: CsvRecord + Serialize>(
    records: &[R],
    label: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub.get_one::<String>("out").context("--out is required")?;

    let body = match fmt.as_str() {
        "csv" => encode_records(records).with_context(|| format!("Encode {} as CSV", label))?,
        "json" => serde_json::to_string_pretty(records)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };
    std::fs::write(out, body).with_context(|| format!("Write {}", out))?;
    println!("Exported {} {} to {}", records.len(), label, out);
    Ok(())
}
