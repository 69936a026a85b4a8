//! Helpers for fixed-point money amounts.
//!
//! Amounts use [rust_decimal::Decimal] everywhere so that balance arithmetic
//! has no floating-point representation error. Amounts are stored in SQLite
//! as TEXT and parsed back on read.

use rusqlite::{Row, types::Type};
use rust_decimal::Decimal;

/// Read a decimal amount from a TEXT column.
pub fn decimal_from_row(row: &Row, index: usize) -> Result<Decimal, rusqlite::Error> {
    let text: String = row.get(index)?;

    text.parse().map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
    })
}

/// Format an amount with exactly two decimal places, e.g. `45.50`.
pub fn format_amount(amount: &Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Serde adaptor for amount fields.
///
/// Serializes as a decimal string so the scale survives the round-trip
/// (`100.00` stays `100.00`). Deserializes from either a JSON number or a
/// decimal string.
pub mod serde_amount {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&amount.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountRepr {
        Number(serde_json::Number),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match AmountRepr::deserialize(deserializer)? {
            AmountRepr::Number(number) => number.to_string(),
            AmountRepr::Text(text) => text,
        };

        text.parse().map_err(de::Error::custom)
    }
}
