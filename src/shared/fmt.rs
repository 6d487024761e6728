//! Amount formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` monetary values with fixed two-decimal
//! output, thousands separators, and abbreviated suffixes (K/M/B/T).

use rust_decimal::prelude::*;
use std::sync::OnceLock;

static TRILLION: OnceLock<Decimal> = OnceLock::new();
static BILLION: OnceLock<Decimal> = OnceLock::new();
static MILLION: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn get_trillion() -> &'static Decimal {
    TRILLION.get_or_init(|| Decimal::from(1_000_000_000_000u64))
}

fn get_billion() -> &'static Decimal {
    BILLION.get_or_init(|| Decimal::from(1_000_000_000u64))
}

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000u64))
}

fn get_thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from(1_000u64))
}

/// Adds thousands separators to an already formatted numeric string.
fn group_thousands(formatted: &str) -> String {
    let parts = formatted.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{}", rest))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Format a monetary amount with two decimal places and thousands separators.
pub fn display_amount(value: &Decimal) -> String {
    group_thousands(&format!("{:.2}", value.round_dp(2)))
}

/// Abbreviate an amount with K/M/B/T suffixes.
pub fn abbr_amount(amount: &Decimal, digits: Option<usize>) -> String {
    let digits = digits.unwrap_or(2);
    let sign = if amount < &Decimal::ZERO { "-" } else { "" };
    let abs_amount = amount.abs();

    if abs_amount >= *get_trillion() {
        format!(
            "{}{:.precision$}T",
            sign,
            abs_amount / get_trillion(),
            precision = digits
        )
    } else if abs_amount >= *get_billion() {
        format!(
            "{}{:.precision$}B",
            sign,
            abs_amount / get_billion(),
            precision = digits
        )
    } else if abs_amount >= *get_million() {
        format!(
            "{}{:.precision$}M",
            sign,
            abs_amount / get_million(),
            precision = digits
        )
    } else if abs_amount >= *get_thousand() {
        format!(
            "{}{:.precision$}K",
            sign,
            abs_amount / get_thousand(),
            precision = digits
        )
    } else {
        format!("{}{:.precision$}", sign, abs_amount, precision = digits)
    }
}
