//! Fen (cent) and yuan conversion on decimal strings.
//!
//! Amounts are shifted by moving the decimal point in the text, never through
//! floating point, so large values keep every digit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::check;
use crate::numeral::NumeralInput;

/// Default result of [`fen_to_yuan`] for blank input.
pub const DEFAULT_YUAN_EMPTY: &str = "0.00";

/// Default result of [`yuan_to_fen`] for blank input.
pub const DEFAULT_FEN_EMPTY: &str = "0";

/// Output options for [`fen_to_yuan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuanFormat {
    /// Returned for blank input.
    pub empty: String,
    /// Trim trailing fractional zeros (`20.00` → `20`, `0.20` → `0.2`).
    pub cut_zero: bool,
}

impl Default for YuanFormat {
    fn default() -> Self {
        Self {
            empty: DEFAULT_YUAN_EMPTY.to_string(),
            cut_zero: false,
        }
    }
}

/// Convert fen to yuan (`2000` → `20.00`).
///
/// Any fractional part of the input is dropped without rounding. A leading
/// `-` is kept, including on zero. Blank input yields `format.empty`;
/// input that is not a signed decimal yields an empty string.
pub fn fen_to_yuan<'a>(input: impl Into<NumeralInput<'a>>, format: &YuanFormat) -> String {
    let input = input.into();
    let Some(text) = input.as_text().filter(|text| !text.is_empty()) else {
        return format.empty.clone();
    };
    if !check::is_number(text) {
        debug!(input = text, "rejected fen amount");
        return String::new();
    }

    let (sign, digits) = split_sign(text);
    let whole = digits.split_once('.').map_or(digits, |(whole, _)| whole);
    let yuan = match whole.len() {
        1 => format!("0.0{whole}"),
        2 => format!("0.{whole}"),
        len => format!("{}.{}", &whole[..len - 2], &whole[len - 2..]),
    };

    if format.cut_zero {
        format!("{sign}{}", yuan.trim_end_matches('0').trim_end_matches('.'))
    } else {
        format!("{sign}{yuan}")
    }
}

/// Convert yuan to fen (`10.0201` → `1002`).
///
/// Only the first two fractional digits count; the rest are dropped without
/// rounding. Blank input yields `empty` (default `"0"`); input that is not a
/// signed decimal yields an empty string.
pub fn yuan_to_fen<'a>(input: impl Into<NumeralInput<'a>>, empty: Option<&str>) -> String {
    let input = input.into();
    let Some(text) = input.as_text().filter(|text| !text.is_empty()) else {
        return empty.unwrap_or(DEFAULT_FEN_EMPTY).to_string();
    };
    if !check::is_number(text) {
        debug!(input = text, "rejected yuan amount");
        return String::new();
    }

    let (sign, digits) = split_sign(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let cents: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(2)
        .collect();
    let fen = format!("{whole}{cents}");
    let fen = fen.trim_start_matches('0');

    if fen.is_empty() {
        format!("{sign}0")
    } else {
        format!("{sign}{fen}")
    }
}

/// Report for one fen/yuan conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MoneyConversion {
    /// The input text, absent when no value was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// The converted amount.
    pub output: String,
    /// `false` when the input was not a signed decimal.
    pub ok: bool,
}

impl MoneyConversion {
    /// Build a report from an input and the string it converted to.
    pub fn new<'a>(input: impl Into<NumeralInput<'a>>, output: String) -> Self {
        let input = input.into();
        let ok = input
            .as_text()
            .is_none_or(|text| text.is_empty() || check::is_number(text));
        Self {
            input: input.as_text().map(str::to_string),
            output,
            ok,
        }
    }
}

fn split_sign(text: &str) -> (&str, &str) {
    text.strip_prefix('-')
        .map_or(("", text), |digits| ("-", digits))
}
