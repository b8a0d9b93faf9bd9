// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived aggregates over active transactions and reconciled budgets.
//!
//! Every entry point re-filters to `isDeleted == 0` and treats a missing
//! amount as zero, so any collection (including an empty one) is accepted.

use crate::models::{Budget, Transaction};
use crate::utils::{parse_budget_amount, sum_amounts};
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const WEEKLY_WINDOW: usize = 8;
pub const TOP_EXPENSES: usize = 10;
pub const TOP_RECURRING: usize = 10;
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const UNKNOWN: &str = "Unknown";

const DAY_MS: i64 = 86_400_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    #[serde(rename = "INCOME")]
    pub income: Decimal,
    #[serde(rename = "EXPENSE")]
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySpend {
    pub week: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopExpense {
    pub description: String,
    pub amount: Option<Decimal>,
    pub category: String,
    pub date: Option<i64>,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub name: String,
    pub category: String,
    pub category_id: String,
    pub budget_amount: Decimal,
    pub spent_amount: Decimal,
    pub period: String,
    pub status: String,
    pub percentage_used: Decimal,
    pub remaining: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAverage {
    pub average: Decimal,
    pub total_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub description: String,
    pub frequency: usize,
    pub average_amount: Decimal,
    pub total_amount: Decimal,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
    pub category_breakdown: BTreeMap<String, Decimal>,
    pub payment_method_breakdown: BTreeMap<String, Decimal>,
    pub monthly_trends: BTreeMap<String, MonthlyTotals>,
    pub weekly_trends: Vec<WeeklySpend>,
    pub top_expenses: Vec<TopExpense>,
    pub transaction_counts: BTreeMap<String, usize>,
    pub average_by_category: BTreeMap<String, Decimal>,
    pub budget_tracking: Vec<BudgetView>,
    pub daily_average_spending: DailyAverage,
    pub recurring_expenses: Vec<RecurringExpense>,
}

/// Snapshot with calendar keys in the local time zone.
pub fn compute_analytics(transactions: &[Transaction], budgets: &[Budget]) -> AnalyticsSnapshot {
    compute_analytics_in(&Local, transactions, budgets)
}

pub fn compute_analytics_in<Tz: TimeZone>(
    tz: &Tz,
    transactions: &[Transaction],
    budgets: &[Budget],
) -> AnalyticsSnapshot {
    let active: Vec<&Transaction> = transactions.iter().filter(|t| t.is_active()).collect();
    let expenses: Vec<&Transaction> = active.iter().copied().filter(|t| t.is_expense()).collect();

    let total_income = sum_amounts(
        active
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount_or_zero()),
    );
    let total_expense = sum_amounts(expenses.iter().map(|t| t.amount_or_zero()));
    let net_savings = total_income.saturating_sub(total_expense);
    let savings_rate = if total_income > Decimal::ZERO {
        percent(net_savings, total_income)
    } else {
        Decimal::ZERO
    };

    let mut category_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut payment_method_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in &expenses {
        let category = label_or(&t.category_id, UNCATEGORIZED);
        add_to(
            category_breakdown.entry(category.clone()).or_default(),
            t.amount_or_zero(),
        );
        *category_counts.entry(category).or_default() += 1;
        add_to(
            payment_method_breakdown
                .entry(label_or(&t.payment_method, UNKNOWN))
                .or_default(),
            t.amount_or_zero(),
        );
    }
    let average_by_category = category_breakdown
        .iter()
        .map(|(category, total)| {
            let count = category_counts.get(category).copied().unwrap_or(1).max(1);
            (category.clone(), *total / Decimal::from(count))
        })
        .collect();

    let mut transaction_counts: BTreeMap<String, usize> = BTreeMap::new();
    for t in &active {
        *transaction_counts
            .entry(label_or(t.r#type.as_str(), UNKNOWN))
            .or_default() += 1;
    }

    AnalyticsSnapshot {
        total_income,
        total_expense,
        net_savings,
        savings_rate,
        transaction_count: active.len(),
        category_breakdown,
        payment_method_breakdown,
        monthly_trends: monthly_trends(tz, &active),
        weekly_trends: weekly_trends(tz, &expenses),
        top_expenses: top_expenses(&expenses),
        transaction_counts,
        average_by_category,
        budget_tracking: budget_tracking(budgets),
        daily_average_spending: daily_average(&expenses),
        recurring_expenses: recurring_expenses(&expenses),
    }
}

fn label_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn add_to(acc: &mut Decimal, amount: Decimal) {
    *acc = acc.saturating_add(amount);
}

fn percent(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_default()
}

fn local_date<Tz: TimeZone>(tz: &Tz, ms: i64) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(ms).single().map(|dt| dt.date_naive())
}

/// "YYYY-MM" of the timestamp in `tz`.
pub fn month_key<Tz: TimeZone>(tz: &Tz, ms: i64) -> Option<String> {
    local_date(tz, ms).map(|d| format!("{}-{:02}", d.year(), d.month()))
}

/// "YYYY-Wnn": the day offset from Jan 1 plus Jan 1's weekday (Sunday = 0)
/// plus one, divided by seven and rounded up.
pub fn week_key<Tz: TimeZone>(tz: &Tz, ms: i64) -> Option<String> {
    let date = local_date(tz, ms)?;
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
    let days = i64::from(date.ordinal0());
    let offset = i64::from(jan1.weekday().num_days_from_sunday());
    let week = (days + offset + 1 + 6) / 7;
    Some(format!("{}-W{:02}", date.year(), week))
}

fn monthly_trends<Tz: TimeZone>(
    tz: &Tz,
    active: &[&Transaction],
) -> BTreeMap<String, MonthlyTotals> {
    let mut trends: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
    for t in active {
        let Some(key) = t.transaction_date.and_then(|ms| month_key(tz, ms)) else {
            continue;
        };
        let entry = trends.entry(key).or_default();
        if t.is_income() {
            add_to(&mut entry.income, t.amount_or_zero());
        } else if t.is_expense() {
            add_to(&mut entry.expense, t.amount_or_zero());
        }
    }
    trends
}

fn weekly_trends<Tz: TimeZone>(tz: &Tz, expenses: &[&Transaction]) -> Vec<WeeklySpend> {
    let mut weeks: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in expenses {
        if let Some(key) = t.transaction_date.and_then(|ms| week_key(tz, ms)) {
            add_to(weeks.entry(key).or_default(), t.amount_or_zero());
        }
    }
    weeks
        .into_iter()
        .rev()
        .take(WEEKLY_WINDOW)
        .map(|(week, amount)| WeeklySpend { week, amount })
        .collect()
}

fn top_expenses(expenses: &[&Transaction]) -> Vec<TopExpense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount_or_zero().cmp(&a.amount_or_zero()));
    sorted
        .into_iter()
        .take(TOP_EXPENSES)
        .map(|t| TopExpense {
            description: t.description.clone(),
            amount: t.amount,
            category: t.category_id.clone(),
            date: t.transaction_date,
            payment_method: t.payment_method.clone(),
        })
        .collect()
}

pub fn budget_tracking(budgets: &[Budget]) -> Vec<BudgetView> {
    budgets
        .iter()
        .map(|b| {
            let budget_amount = parse_budget_amount(&b.budget_amount);
            let spent_amount = parse_budget_amount(&b.spent_amount);
            let percentage_used = if budget_amount > Decimal::ZERO {
                percent(spent_amount, budget_amount)
            } else {
                Decimal::ZERO
            };
            BudgetView {
                name: b.name.clone(),
                category: b.category_name.clone(),
                category_id: b.category_id.clone(),
                budget_amount,
                spent_amount,
                period: b.period.clone(),
                status: b.status.clone(),
                percentage_used,
                remaining: budget_amount.saturating_sub(spent_amount),
            }
        })
        .collect()
}

/// Only dated expenses count, both for the span and for the total.
fn daily_average(expenses: &[&Transaction]) -> DailyAverage {
    let dated: Vec<(i64, Decimal)> = expenses
        .iter()
        .filter_map(|t| t.transaction_date.map(|d| (d, t.amount_or_zero())))
        .collect();
    let (Some(min), Some(max)) = (
        dated.iter().map(|(d, _)| *d).min(),
        dated.iter().map(|(d, _)| *d).max(),
    ) else {
        return DailyAverage::default();
    };

    let Some(span) = max.checked_sub(min) else {
        return DailyAverage::default();
    };
    let total_days = span.div_euclid(DAY_MS) + 1;
    let total = sum_amounts(dated.iter().map(|(_, a)| *a));
    let average = if total_days > 0 {
        total
            .checked_div(Decimal::from(total_days))
            .unwrap_or_default()
    } else {
        Decimal::ZERO
    };
    DailyAverage {
        average,
        total_days,
    }
}

/// Groups keep first-seen order, and each group's category comes from its
/// first member in input order.
fn recurring_expenses(expenses: &[&Transaction]) -> Vec<RecurringExpense> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Transaction>)> = Vec::new();
    for t in expenses.iter().copied().filter(|t| !t.description.is_empty()) {
        match index.get(t.description.as_str()) {
            Some(&i) => groups[i].1.push(t),
            None => {
                index.insert(t.description.as_str(), groups.len());
                groups.push((t.description.as_str(), vec![t]));
            }
        }
    }

    let mut recurring: Vec<RecurringExpense> = groups
        .into_iter()
        .filter(|(_, group)| group.len() >= 2)
        .map(|(description, group)| {
            let total_amount = sum_amounts(group.iter().map(|t| t.amount_or_zero()));
            RecurringExpense {
                description: description.to_string(),
                frequency: group.len(),
                average_amount: total_amount / Decimal::from(group.len()),
                total_amount,
                category: group[0].category_id.clone(),
            }
        })
        .collect();
    recurring.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    recurring.truncate(TOP_RECURRING);
    recurring
}
