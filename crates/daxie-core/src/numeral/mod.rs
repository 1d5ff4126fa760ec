//! Arabic numeral to Chinese capital-numeral conversion.
//!
//! Two renderings share one validation pipeline:
//!
//! - [`number_to_cn`] spells a numeral with place and tier words and a 点
//!   before the fractional digits (`10000800` → `壹仟万零捌佰`).
//! - [`currency_to_cn`] spells an RMB amount with 元/角/分/整
//!   (`1.01` → `壹元零壹分`).
//!
//! Both always return a string. Malformed input yields `数据错误`, values of
//! 10^12 or more yield `超大数字` / `超大金额`. The `try_*` variants return a
//! [`NumeralError`] instead.
//!
//! # Example
//!
//! ```
//! use daxie_core::numeral::{currency_to_cn, number_to_cn, NumeralInput};
//!
//! assert_eq!(number_to_cn("1008"), "壹仟零捌");
//! assert_eq!(number_to_cn(1_000_000_000_000_u64), "超大数字");
//! assert_eq!(currency_to_cn(0.1, None), "壹角");
//! assert_eq!(currency_to_cn(NumeralInput::Absent, Some("--")), "--");
//! ```

mod parse;
mod render;

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NumeralError, NumeralResult};

pub use parse::{MAX_INTEGER_DIGITS, Numeral};
pub use render::{DIGITS, PLACES, TIERS};

/// Default rendering of an absent amount in currency mode.
pub const EMPTY_AMOUNT: &str = "零元整";

/// A value to convert: text, a number, or nothing at all.
///
/// Numbers are converted through their shortest decimal form, so `0.1_f64`
/// is read as `"0.1"` and `1e12` as `"1000000000000"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NumeralInput<'a> {
    /// No value was supplied.
    #[default]
    Absent,
    /// A textual value, validated during conversion.
    Text(Cow<'a, str>),
}

impl NumeralInput<'_> {
    /// The textual value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(text.as_ref()),
        }
    }

    /// Whether the value is absent or the empty string.
    pub fn is_blank(&self) -> bool {
        self.as_text().is_none_or(str::is_empty)
    }
}

impl<'a> From<&'a str> for NumeralInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for NumeralInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for NumeralInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Option<&'a str>> for NumeralInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

impl From<Option<String>> for NumeralInput<'_> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

impl From<f64> for NumeralInput<'_> {
    fn from(value: f64) -> Self {
        // -0.0 would otherwise print as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<i64> for NumeralInput<'_> {
    fn from(value: i64) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<u64> for NumeralInput<'_> {
    fn from(value: u64) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

/// How a numeral is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RenderMode {
    /// Place and tier words, fractional digits after 点.
    PlainNumeral,
    /// RMB amount with 元/角/分 units, 整 for whole amounts.
    Currency,
}

impl RenderMode {
    /// Returns the mode as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlainNumeral => "plain-numeral",
            Self::Currency => "currency",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a conversion was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The value was rendered.
    Converted,
    /// Currency mode received no value and used the empty format.
    Empty,
    /// The value is not an unsigned decimal numeral.
    Malformed,
    /// The value is 10^12 or more.
    OutOfRange,
}

impl From<&NumeralError> for Outcome {
    fn from(err: &NumeralError) -> Self {
        match err {
            NumeralError::Malformed { .. } => Self::Malformed,
            NumeralError::OutOfRange { .. } => Self::OutOfRange,
        }
    }
}

/// Result of converting one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conversion {
    /// The input text (absent when no value was supplied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Rendering that was requested.
    pub mode: RenderMode,
    /// How the value was resolved.
    pub outcome: Outcome,
    /// Rendered text, or the sentinel for the outcome.
    pub text: String,
}

impl Conversion {
    /// Whether the value was rendered or treated as an empty amount.
    pub const fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Converted | Outcome::Empty)
    }
}

impl Numeral {
    /// Spell this numeral in the given mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainNumeral => render::plain(self),
            RenderMode::Currency => render::currency(self),
        }
    }
}

/// Convert a value, reporting how it was resolved.
///
/// `empty_format` replaces `零元整` for blank input in currency mode and is
/// ignored in plain mode, where blank input is malformed.
#[tracing::instrument(skip_all, fields(mode = %mode))]
pub fn convert<'a>(
    input: impl Into<NumeralInput<'a>>,
    mode: RenderMode,
    empty_format: Option<&str>,
) -> Conversion {
    let input = input.into();
    let raw = input.as_text().map(str::to_string);

    if mode == RenderMode::Currency && input.is_blank() {
        return Conversion {
            input: raw,
            mode,
            outcome: Outcome::Empty,
            text: empty_format.unwrap_or(EMPTY_AMOUNT).to_string(),
        };
    }

    match Numeral::parse(input.as_text().unwrap_or_default()) {
        Ok(numeral) => Conversion {
            input: raw,
            mode,
            outcome: Outcome::Converted,
            text: numeral.render(mode),
        },
        Err(err) => {
            debug!(error = %err, "rejected numeral input");
            Conversion {
                input: raw,
                mode,
                outcome: Outcome::from(&err),
                text: err.sentinel(mode).to_string(),
            }
        }
    }
}

/// Spell a numeral in capital numerals (`1008` → `壹仟零捌`).
///
/// Returns `数据错误` for absent or malformed input and `超大数字` for values
/// of 10^12 or more.
pub fn number_to_cn<'a>(input: impl Into<NumeralInput<'a>>) -> String {
    convert(input, RenderMode::PlainNumeral, None).text
}

/// Spell an RMB amount in capital numerals (`1.01` → `壹元零壹分`).
///
/// Blank input yields `empty_format`, or `零元整` when none is given.
/// Returns `数据错误` for malformed input and `超大金额` for amounts of
/// 10^12 or more.
pub fn currency_to_cn<'a>(
    input: impl Into<NumeralInput<'a>>,
    empty_format: Option<&str>,
) -> String {
    convert(input, RenderMode::Currency, empty_format).text
}

/// Like [`number_to_cn`], but reports rejection as an error.
pub fn try_number_to_cn<'a>(input: impl Into<NumeralInput<'a>>) -> NumeralResult<String> {
    let input = input.into();
    Numeral::parse(input.as_text().unwrap_or_default())
        .map(|numeral| numeral.render(RenderMode::PlainNumeral))
}

/// Like [`currency_to_cn`], but reports rejection as an error.
///
/// Blank input is a zero amount, not an error.
pub fn try_currency_to_cn<'a>(input: impl Into<NumeralInput<'a>>) -> NumeralResult<String> {
    let input = input.into();
    match input.as_text() {
        Some(text) if !text.is_empty() => {
            Numeral::parse(text).map(|numeral| numeral.render(RenderMode::Currency))
        }
        _ => Ok(EMPTY_AMOUNT.to_string()),
    }
}
