//! Command implementations.

use std::io::BufRead;

use anyhow::{Context, bail};
use daxie_core::Conversion;
use owo_colors::{OwoColorize, Stream};

pub mod check;
pub mod currency;
pub mod info;
pub mod money;
pub mod number;
#[cfg(feature = "mcp")]
pub mod serve;

/// Values from the command line, or one per stdin line when none were given.
///
/// Trailing `\r` is dropped from stdin lines; an empty line is a blank value.
pub fn read_values(values: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    read_lines(std::io::stdin().lock())
}

fn read_lines(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|line| line.trim_end_matches('\r').to_string())
                .context("failed to read values from stdin")
        })
        .collect()
}

/// Print conversion reports, one text per line or as a JSON array.
pub fn print_conversions(reports: &[Conversion], global_json: bool) -> anyhow::Result<()> {
    if global_json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for report in reports {
        if report.is_ok() {
            println!("{}", report.text);
        } else {
            println!(
                "{}",
                report.text.if_supports_color(Stream::Stdout, |text| text.red())
            );
        }
    }
    Ok(())
}

/// Fail when `strict` is set and any of `total` values was rejected.
pub fn check_strict(rejected: usize, total: usize, strict: bool) -> anyhow::Result<()> {
    if strict && rejected > 0 {
        bail!("{rejected} of {total} values rejected");
    }
    Ok(())
}
