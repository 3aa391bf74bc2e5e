// ABOUTME: Lenient decoding of quantities that may arrive as numbers, strings, or null
// ABOUTME: Absent or unparsable values stay None; negative or non-finite values coerce to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a JSON value into a quantity.
///
/// Numbers and numeric strings are accepted and coerced with
/// [`coerce_non_negative`]. `null`, absent values, booleans, and strings that
/// do not parse as a number yield `None`.
#[must_use]
pub fn parse_quantity(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(coerce_non_negative(raw))
}

/// Clamp a quantity into the non-negative finite range, malformed input becomes zero
#[must_use]
pub fn coerce_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Serde adapter for optional quantities (`#[serde(deserialize_with = ...)]`)
///
/// # Errors
///
/// Never fails on well-formed JSON; malformed quantities map to `None`
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_quantity))
}

/// Serde adapter for quantities that default to zero when missing or malformed
///
/// # Errors
///
/// Never fails on well-formed JSON
pub fn deserialize_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional(deserializer)?.unwrap_or(0.0))
}
