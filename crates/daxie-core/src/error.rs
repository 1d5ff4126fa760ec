//! Error types for daxie-core.

use thiserror::Error;

use crate::numeral::RenderMode;

/// Sentinel returned for malformed input.
pub const MALFORMED: &str = "数据错误";

/// Sentinel returned by plain-numeral conversion for values of 10^12 or more.
pub const NUMBER_TOO_LARGE: &str = "超大数字";

/// Sentinel returned by currency conversion for amounts of 10^12 or more.
pub const AMOUNT_TOO_LARGE: &str = "超大金额";

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a value cannot be rendered as capital numerals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// The value is absent or is not an unsigned decimal numeral.
    #[error("not an unsigned decimal numeral: {input:?}")]
    Malformed {
        /// The rejected text (empty when the value was absent).
        input: String,
    },

    /// The integer part has more than twelve significant digits.
    #[error("value has {digits} integer digits, at most 12 are supported")]
    OutOfRange {
        /// Number of significant integer digits in the rejected value.
        digits: usize,
    },
}

impl NumeralError {
    /// The sentinel string the string-returning API reports for this error.
    pub const fn sentinel(&self, mode: RenderMode) -> &'static str {
        match (self, mode) {
            (Self::Malformed { .. }, _) => MALFORMED,
            (Self::OutOfRange { .. }, RenderMode::PlainNumeral) => NUMBER_TOO_LARGE,
            (Self::OutOfRange { .. }, RenderMode::Currency) => AMOUNT_TOO_LARGE,
        }
    }
}

/// Result type alias using [`NumeralError`].
pub type NumeralResult<T> = Result<T, NumeralError>;
