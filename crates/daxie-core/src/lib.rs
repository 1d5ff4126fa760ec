//! Core library for daxie.
//!
//! Converts Arabic numerals into Chinese capital numerals (大写数字), both as
//! plain numerals and as RMB amounts, plus the small string helpers around
//! them.
//!
//! # Modules
//!
//! - [`numeral`] - Capital-numeral conversion (`number_to_cn`, `currency_to_cn`)
//! - [`money`] - Fen/yuan conversion on decimal strings
//! - [`check`] - Numeric string predicates
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types, result aliases and sentinel strings
//!
//! # Quick Start
//!
//! ```
//! use daxie_core::{currency_to_cn, number_to_cn};
//!
//! assert_eq!(number_to_cn("10000800"), "壹仟万零捌佰");
//! assert_eq!(currency_to_cn("1.01", None), "壹元零壹分");
//! assert_eq!(number_to_cn("-12"), "数据错误");
//! ```
#![deny(unsafe_code)]

pub mod check;

pub mod config;

pub mod error;

pub mod money;

pub mod numeral;

pub use check::NumericCheck;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, NumeralError, NumeralResult};
pub use money::{MoneyConversion, YuanFormat, fen_to_yuan, yuan_to_fen};
pub use numeral::{
    Conversion, NumeralInput, Outcome, RenderMode, convert, currency_to_cn, number_to_cn,
    try_currency_to_cn, try_number_to_cn,
};
