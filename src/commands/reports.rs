// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::snapshot_or_hint;
use crate::analytics::AnalyticsSnapshot;
use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use crate::utils::{fmt_epoch_ms, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle<S: KeyValueStore>(
    ledger: &LedgerStore<S>,
    name: &str,
    m: &clap::ArgMatches,
) -> Result<()> {
    let Some(snapshot) = snapshot_or_hint(ledger) else {
        return Ok(());
    };
    match name {
        "summary" => summary(snapshot, m)?,
        "trends" => match m.subcommand() {
            Some(("monthly", sub)) => monthly(snapshot, sub)?,
            Some(("weekly", sub)) => weekly(snapshot, sub)?,
            _ => {}
        },
        "categories" => categories(snapshot, m)?,
        "payments" => payments(snapshot, m)?,
        "top" => top(snapshot, m)?,
        "recurring" => recurring(snapshot, m)?,
        "analytics" => println!("{}", serde_json::to_string_pretty(snapshot)?),
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
    pub daily_average: Decimal,
    pub total_days: i64,
}

impl From<&AnalyticsSnapshot> for Summary {
    fn from(s: &AnalyticsSnapshot) -> Self {
        Summary {
            total_income: s.total_income,
            total_expense: s.total_expense,
            net_savings: s.net_savings,
            savings_rate: s.savings_rate,
            transaction_count: s.transaction_count,
            daily_average: s.daily_average_spending.average,
            total_days: s.daily_average_spending.total_days,
        }
    }
}

fn summary(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let data = Summary::from(s);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let mut rows = vec![
        vec!["Total income".into(), fmt_money(&data.total_income)],
        vec!["Total expense".into(), fmt_money(&data.total_expense)],
        vec!["Net savings".into(), fmt_money(&data.net_savings)],
        vec!["Savings rate".into(), format!("{}%", fmt_money(&data.savings_rate))],
        vec!["Transactions".into(), data.transaction_count.to_string()],
        vec![
            "Daily average".into(),
            format!("{} over {} days", fmt_money(&data.daily_average), data.total_days),
        ],
    ];
    for (kind, count) in &s.transaction_counts {
        rows.push(vec![format!("{} count", kind), count.to_string()]);
    }
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}

fn monthly(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.monthly_trends)? {
        return Ok(());
    }
    let data = s
        .monthly_trends
        .iter()
        .rev()
        .map(|(month, t)| {
            vec![
                month.clone(),
                fmt_money(&t.income),
                fmt_money(&t.expense),
                fmt_money(&(t.income - t.expense)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Net"], data)
    );
    Ok(())
}

fn weekly(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.weekly_trends)? {
        return Ok(());
    }
    let data = s
        .weekly_trends
        .iter()
        .map(|w| vec![w.week.clone(), fmt_money(&w.amount)])
        .collect();
    println!("{}", pretty_table(&["Week", "Expense"], data));
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRow {
    category: String,
    total: Decimal,
    average: Decimal,
}

fn categories(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let mut items: Vec<CategoryRow> = s
        .category_breakdown
        .iter()
        .map(|(category, total)| CategoryRow {
            category: category.clone(),
            total: *total,
            average: s
                .average_by_category
                .get(category)
                .copied()
                .unwrap_or_default(),
        })
        .collect();
    items.sort_by(|a, b| b.total.cmp(&a.total));
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let data = items
        .iter()
        .map(|r| vec![r.category.clone(), fmt_money(&r.total), fmt_money(&r.average)])
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Average"], data)
    );
    Ok(())
}

fn payments(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let mut items: Vec<(&String, &Decimal)> = s.payment_method_breakdown.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1));
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let data = items
        .into_iter()
        .map(|(method, amount)| vec![method.clone(), fmt_money(amount)])
        .collect();
    println!("{}", pretty_table(&["Payment method", "Spent"], data));
    Ok(())
}

fn top(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.top_expenses)? {
        return Ok(());
    }
    let data = s
        .top_expenses
        .iter()
        .map(|e| {
            vec![
                fmt_epoch_ms(e.date),
                e.description.clone(),
                e.category.clone(),
                e.payment_method.clone(),
                fmt_money(&e.amount.unwrap_or_default()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Description", "Category", "Payment method", "Amount"],
            data
        )
    );
    Ok(())
}

fn recurring(s: &AnalyticsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &s.recurring_expenses,
    )? {
        return Ok(());
    }
    let data = s
        .recurring_expenses
        .iter()
        .map(|r| {
            vec![
                r.description.clone(),
                r.category.clone(),
                r.frequency.to_string(),
                fmt_money(&r.average_amount),
                fmt_money(&r.total_amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Description", "Category", "Times", "Average", "Total"],
            data
        )
    );
    Ok(())
}
