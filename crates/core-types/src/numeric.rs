//! Explicit numeric coercion and rounding.
//!
//! Input datasets are loosely typed: amounts and prices may arrive as JSON
//! numbers, numeric strings, `null`, or be missing altogether. Every numeric
//! input field goes through [`coerce_number`], which falls back to `0.0`
//! whenever a value cannot be read as a finite-or-infinite number.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number of decimal places kept in reported money figures.
pub const MONEY_DECIMALS: u32 = 2;

/// Reads a JSON value as a number, defaulting to `0.0`.
///
/// * numbers pass through unchanged,
/// * strings are trimmed and parsed (an empty string is `0.0`),
/// * `true` is `1.0`, `false` is `0.0`,
/// * `null`, arrays, objects, unparseable strings and NaN all yield `0.0`.
pub fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_text(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_nan() { 0.0 } else { number }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(0.0);
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers here.
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.contains("inf") || lowered.contains("nan") {
        return 0.0;
    }

    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Rounds a money figure to two decimal places.
///
/// The exact binary value of `value` is rounded half away from zero, so
/// `1.005` (stored as `1.00499999...`) becomes `1.0` while `0.125` becomes
/// `0.13`. Non-finite values and values outside the `Decimal` range are
/// returned unchanged.
pub fn round_money(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// `deserialize_with` adapter for lenient numeric fields.
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// `deserialize_with` adapter for identifiers and name parts.
///
/// Accepts strings, numbers and booleans; `null` becomes an empty string.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_text(&n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
