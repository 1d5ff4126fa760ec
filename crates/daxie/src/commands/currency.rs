//! Currency command: spell RMB amounts in capital digits.

use clap::Args;
use daxie_core::{Conversion, RenderMode, convert};
use tracing::{debug, instrument};

use super::{check_strict, print_conversions, read_values};

/// Arguments for the `currency` subcommand.
#[derive(Args, Debug, Default)]
pub struct CurrencyArgs {
    /// Amounts to convert (one per stdin line when omitted).
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Text for a blank amount (default: 零元整).
    #[arg(long, value_name = "TEXT")]
    pub empty_format: Option<String>,

    /// Exit with an error when any amount is rejected.
    #[arg(long)]
    pub strict: bool,
}

/// Convert each amount with the currency rules.
#[instrument(name = "cmd_currency", skip_all, fields(count = args.values.len()))]
pub fn cmd_currency(
    args: CurrencyArgs,
    global_json: bool,
    config_empty_format: Option<&str>,
) -> anyhow::Result<()> {
    let empty_format = args.empty_format.as_deref().or(config_empty_format);
    debug!(strict = args.strict, ?empty_format, "executing currency command");

    let values = read_values(args.values)?;
    let reports: Vec<Conversion> = values
        .iter()
        .map(|value| convert(value.as_str(), RenderMode::Currency, empty_format))
        .collect();

    print_conversions(&reports, global_json)?;
    let rejected = reports.iter().filter(|report| !report.is_ok()).count();
    check_strict(rejected, reports.len(), args.strict)
}
