//! Grammar check for unsigned decimal numerals.
//!
//! Accepts exactly `digit+ ("." digit+)?` over ASCII digits. Signs, bare
//! leading dots, exponents, whitespace and repeated dots are all rejected.

use std::str::FromStr;

use crate::error::{NumeralError, NumeralResult};

/// Largest number of significant integer digits that can be rendered.
///
/// Twelve digits covers everything below 10^12 (the 亿 tier tops out at
/// 9999亿).
pub const MAX_INTEGER_DIGITS: usize = 12;

/// Fractional digits carried into rendering; later digits are dropped.
const MAX_FRACTION_DIGITS: usize = 2;

/// A validated, in-range decimal numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    /// Significant integer digits; `"0"` when the integer part is zero.
    integer: String,
    /// Up to two fractional digits exactly as written.
    fraction: Option<String>,
}

impl Numeral {
    /// Validate `text` and split it into integer and fractional digits.
    ///
    /// Leading zeros in the integer part are not significant. Fractional
    /// digits beyond the second are truncated, never rounded.
    pub fn parse(text: &str) -> NumeralResult<Self> {
        let malformed = || NumeralError::Malformed {
            input: text.to_string(),
        };

        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text, None),
        };

        if !is_digit_run(int_part) {
            return Err(malformed());
        }
        if let Some(frac) = frac_part
            && !is_digit_run(frac)
        {
            return Err(malformed());
        }

        let significant = int_part.trim_start_matches('0');
        if significant.len() > MAX_INTEGER_DIGITS {
            return Err(NumeralError::OutOfRange {
                digits: significant.len(),
            });
        }

        let integer = if significant.is_empty() {
            "0".to_string()
        } else {
            significant.to_string()
        };
        // ASCII-only at this point, so byte slicing lands on char boundaries.
        let fraction =
            frac_part.map(|frac| frac[..frac.len().min(MAX_FRACTION_DIGITS)].to_string());

        Ok(Self { integer, fraction })
    }

    /// Significant integer digits (`"0"` for a zero integer part).
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// The retained fractional digits, if a fractional part was written.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Whether the integer part is zero.
    pub fn integer_is_zero(&self) -> bool {
        self.integer == "0"
    }

    /// The 角 and 分 digits, treating missing digits as zero.
    pub(crate) fn cents(&self) -> (usize, usize) {
        let digits = self.fraction.as_deref().unwrap_or_default().as_bytes();
        let digit_at = |i: usize| digits.get(i).map_or(0, |b| usize::from(b - b'0'));
        (digit_at(0), digit_at(1))
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
