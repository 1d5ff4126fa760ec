//! Numeric string predicates.
//!
//! Anchored patterns used to pre-screen values before formatting. The
//! capital-numeral converter in [`crate::numeral`] does its own validation and
//! does not depend on these.

use regex::Regex;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Signed decimal: `20`, `-20`, `0.2`, `020`. Rejects `.2` and exponents.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid regex"));

/// Signed integer without leading zeros.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d|[1-9]\d+)$").expect("valid regex"));

/// Signed decimal with a fractional part and no leading zeros.
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d|[1-9]\d+)\.\d+$").expect("valid regex"));

/// Yuan amount: no leading zeros, at most two decimal places.
static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d|[1-9]\d+)(\.\d{1,2})?$").expect("valid regex"));

/// Markers that stand for "no value".
const NULL_MARKERS: &[&str] = &["undefined", "null", "(null)", "NaN", ""];

/// Whether `value` is a null marker (`undefined`, `null`, `(null)`, `NaN`, or empty).
pub fn is_null(value: &str) -> bool {
    NULL_MARKERS.contains(&value)
}

/// Whether `value` is a signed decimal numeral.
pub fn is_number(value: &str) -> bool {
    NUMBER_PATTERN.is_match(value)
}

/// Whether `value` is a signed integer without leading zeros.
pub fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value)
}

/// Whether `value` is a signed decimal with a fractional part.
pub fn is_decimal(value: &str) -> bool {
    DECIMAL_PATTERN.is_match(value)
}

/// Whether `value` is a yuan amount with at most two decimal places.
pub fn is_money(value: &str) -> bool {
    MONEY_PATTERN.is_match(value)
}

/// A named numeric predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum NumericCheck {
    /// Signed decimal numeral.
    Number,
    /// Signed integer without leading zeros.
    Integer,
    /// Signed decimal with a fractional part.
    Decimal,
    /// Yuan amount with at most two decimal places.
    Money,
    /// Null marker.
    Null,
}

impl NumericCheck {
    /// Run this predicate against `value`.
    pub fn test(self, value: &str) -> bool {
        match self {
            Self::Number => is_number(value),
            Self::Integer => is_integer(value),
            Self::Decimal => is_decimal(value),
            Self::Money => is_money(value),
            Self::Null => is_null(value),
        }
    }

    /// Returns the check name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Money => "money",
            Self::Null => "null",
        }
    }
}

impl std::fmt::Display for NumericCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
