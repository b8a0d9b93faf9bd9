// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate, TimeZone};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY: &str = "INR";

const DAY_MS: i64 = 86_400_000;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Local-midnight epoch milliseconds for the start of `date`.
pub fn day_start_ms(date: NaiveDate) -> Result<i64> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid date '{}'", date))?;
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| anyhow!("Date '{}' does not exist in the local time zone", date))?;
    Ok(local.timestamp_millis())
}

/// Last millisecond of `date` in local time.
pub fn day_end_ms(date: NaiveDate) -> Result<i64> {
    match date.succ_opt() {
        Some(next) => Ok(day_start_ms(next)? - 1),
        None => Ok(day_start_ms(date)? + DAY_MS - 1),
    }
}

pub fn fmt_epoch_ms(ms: Option<i64>) -> String {
    ms.and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Lenient decimal parse: surrounding whitespace is ignored, exponent notation
/// is accepted, anything else is `None`.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = s.parse::<Decimal>() {
        return Some(d);
    }
    if let Ok(d) = Decimal::from_scientific(s) {
        return Some(d);
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(|f| Decimal::try_from(f).ok())
}

/// Lenient integer parse; fractional input is truncated toward zero.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
        .map(|f| f.trunc() as i64)
}

/// Numeric segment of a composite "<decimal>,<currency>" amount, 0 when absent.
pub fn parse_budget_amount(s: &str) -> Decimal {
    s.split(',')
        .next()
        .and_then(parse_decimal)
        .unwrap_or(Decimal::ZERO)
}

/// Currency segment of a composite amount, `DEFAULT_CURRENCY` when absent.
pub fn extract_currency_code(s: &str) -> String {
    s.split(',')
        .nth(1)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

/// Sum that clamps at `Decimal::MAX`/`Decimal::MIN` instead of panicking.
pub fn sum_amounts<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_budget_amount(d: Decimal, ccy: &str) -> String {
    format!("{:.2},{}", round2(d), ccy)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", round2(*d))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
