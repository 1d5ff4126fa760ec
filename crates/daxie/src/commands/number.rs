//! Number command: spell numerals in capital digits.

use clap::Args;
use daxie_core::{Conversion, RenderMode, convert};
use tracing::{debug, instrument};

use super::{check_strict, print_conversions, read_values};

/// Arguments for the `number` subcommand.
#[derive(Args, Debug, Default)]
pub struct NumberArgs {
    /// Values to convert (one per stdin line when omitted).
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Exit with an error when any value is rejected.
    #[arg(long)]
    pub strict: bool,
}

/// Convert each value with the plain-numeral rules.
#[instrument(name = "cmd_number", skip_all, fields(count = args.values.len()))]
pub fn cmd_number(args: NumberArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(strict = args.strict, "executing number command");

    let values = read_values(args.values)?;
    let reports: Vec<Conversion> = values
        .iter()
        .map(|value| convert(value.as_str(), RenderMode::PlainNumeral, None))
        .collect();

    print_conversions(&reports, global_json)?;
    let rejected = reports.iter().filter(|report| !report.is_ok()).count();
    check_strict(rejected, reports.len(), args.strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str], strict: bool) -> NumberArgs {
        NumberArgs {
            values: values.iter().map(ToString::to_string).collect(),
            strict,
        }
    }

    #[test]
    fn converts_without_strict() {
        assert!(cmd_number(args(&["1008", "-1"], false), false).is_ok());
    }

    #[test]
    fn strict_rejects_malformed() {
        assert!(cmd_number(args(&["1008", "abc"], true), true).is_err());
    }

    #[test]
    fn strict_rejects_out_of_range() {
        assert!(cmd_number(args(&["1000000000000"], true), false).is_err());
    }
}
