//! Rupee amounts: lenient parsing of form input and the rounding rules used
//! by invoice totals.
//!
//! Every rounding here is half away from zero. Form values that do not parse
//! as a finite decimal are read as zero instead of failing, so an invoice that
//! is still being typed in never breaks the totals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Paise precision for displayed and stored amounts
pub const PAISE_SCALE: u32 = 2;

/// Parse a form value as a decimal amount, falling back to zero
///
/// Accepts plain (`"1500.50"`) and scientific (`"1.5e3"`) notation with
/// surrounding whitespace. Empty, `"-"` and malformed values yield zero.
pub fn parse_lenient(value: &str) -> Decimal {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Round to whole rupees
pub fn round_to_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to paise (2 decimal places)
pub fn round_to_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAISE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole-rupee value of an already rounded amount, saturating at the i64 bounds
pub fn whole_rupees(rounded: Decimal) -> i64 {
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// `amount × rate / 100`, saturating instead of overflowing
pub fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate) / Decimal::ONE_HUNDRED
}

/// Format with exactly two decimal places, e.g. `"1500.00"`
pub fn format_paise(amount: Decimal) -> String {
    let mut rounded = round_to_paise(amount);
    rounded.rescale(PAISE_SCALE);
    rounded.to_string()
}

/// Serde helpers for form payloads where numbers may arrive as JSON numbers,
/// strings, or not at all.
pub mod lenient {
    use super::parse_lenient;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Decimal from a number, numeric string, or null; anything else is zero
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => parse_lenient(&n.to_string()),
            Some(Value::String(s)) => parse_lenient(&s),
            _ => Decimal::ZERO,
        })
    }

    /// Raw text of a form field; numbers keep their literal form, null is empty
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        })
    }

    /// Non-negative whole quantity; fractions are truncated, negatives and
    /// garbage become zero
    pub fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let parsed = match value {
            Some(Value::Number(n)) => parse_lenient(&n.to_string()),
            Some(Value::String(s)) => parse_lenient(&s),
            _ => Decimal::ZERO,
        };
        Ok(super::to_quantity(parsed))
    }
}

fn to_quantity(value: Decimal) -> u32 {
    if value.is_sign_negative() {
        return 0;
    }
    value.trunc().to_u32().unwrap_or(u32::MAX)
}
