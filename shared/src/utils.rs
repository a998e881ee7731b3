//! # Shared Utility Functions
//!
//! Helpers used by the DTOs and by the client's presentation layer.
//!
//! ## Lenient Deserializers
//!
//! The backend is not consistent about numeric encodings: ids arrive as `7` or `"7"`,
//! and prices stored as Postgres `NUMERIC` arrive as `"12.50"`.
//! - [`flexible_id`] - `i64` from a number or a numeric string
//! - [`flexible_number`] - `f64` from a number or a decimal string
//!
//! ## Display Helpers
//!
//! - [`format_price`] - `12.5` → `"$12.50"`
//! - [`full_name`] - join first and last name, skipping empty parts
//! - [`format_timestamp`] - RFC 3339 → `"2024-05-01 14:30"`
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(12.5), "$12.50");
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawInteger {
    Int(i64),
    Text(String),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
}

/// Serde adapter for ids sent either as JSON numbers or numeric strings.
pub mod flexible_id {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match RawInteger::deserialize(deserializer)? {
            RawInteger::Int(value) => Ok(value),
            RawInteger::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text))),
        }
    }

    /// Same as the parent module for `Option<i64>` fields.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(id) => serializer.serialize_some(id),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
            match Option::<RawInteger>::deserialize(deserializer)? {
                None => Ok(None),
                Some(RawInteger::Int(value)) => Ok(Some(value)),
                Some(RawInteger::Text(text)) => text
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text))),
            }
        }
    }
}

/// Serde adapter for amounts sent either as JSON numbers or decimal strings.
pub mod flexible_number {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match RawNumber::deserialize(deserializer)? {
            RawNumber::Num(value) => Ok(value),
            RawNumber::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid number: {:?}", text))),
        }
    }
}

/// Format a price with a dollar sign and two decimals.
pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Join first and last name, skipping empty parts.
pub fn full_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` (UTC). Unparseable input is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
