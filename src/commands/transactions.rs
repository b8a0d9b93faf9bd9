// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::TransactionFilter;
use crate::ledger::LedgerStore;
use crate::models::Transaction;
use crate::store::KeyValueStore;
use crate::utils::{
    day_end_ms, day_start_ms, fmt_epoch_ms, fmt_money, maybe_print_json, parse_date,
    pretty_table,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ledger, sub),
        _ => Ok(()),
    }
}

fn list<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                    r.payment_method.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "CCY", "Payment method"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn build_filter(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let text = |name: &str| sub.get_one::<String>(name).map(|s| s.trim().to_string());
    let start = match sub.get_one::<String>("from") {
        Some(s) => Some(day_start_ms(parse_date(s.trim())?)?),
        None => None,
    };
    let end = match sub.get_one::<String>("to") {
        Some(s) => Some(day_end_ms(parse_date(s.trim())?)?),
        None => None,
    };
    Ok(TransactionFilter {
        r#type: text("type").map(|s| s.to_uppercase()),
        category_id: text("category"),
        payment_method: text("payment-method"),
        search: text("search"),
        start,
        end,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
    pub payment_method: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        TransactionRow {
            date: fmt_epoch_ms(t.transaction_date),
            r#type: t.r#type.to_string(),
            category: t.category_id.clone(),
            description: t.description.clone(),
            amount: fmt_money(&t.amount_or_zero()),
            currency: t.currency_code.clone(),
            payment_method: t.payment_method.clone(),
        }
    }
}

/// Newest first; undated transactions sort last.
pub fn query_rows<S: KeyValueStore>(
    ledger: &LedgerStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = build_filter(sub)?;
    let mut matched = ledger.filter_transactions(&filter);
    matched.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched.into_iter().map(TransactionRow::from).collect())
}
