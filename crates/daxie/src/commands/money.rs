//! Yuan and fen commands: move amounts between cents and yuan.

use clap::Args;
use daxie_core::config::Config;
use daxie_core::{MoneyConversion, fen_to_yuan, yuan_to_fen};
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use super::{check_strict, read_values};

/// Arguments for the `yuan` subcommand.
#[derive(Args, Debug, Default)]
pub struct YuanArgs {
    /// Amounts in fen (one per stdin line when omitted).
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Trim trailing fractional zeros (20.00 → 20).
    #[arg(long)]
    pub cut_zero: bool,

    /// Text for a blank amount (default: 0.00).
    #[arg(long, value_name = "TEXT")]
    pub empty_format: Option<String>,

    /// Exit with an error when any amount is rejected.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `fen` subcommand.
#[derive(Args, Debug, Default)]
pub struct FenArgs {
    /// Amounts in yuan (one per stdin line when omitted).
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Text for a blank amount (default: 0).
    #[arg(long, value_name = "TEXT")]
    pub empty_format: Option<String>,

    /// Exit with an error when any amount is rejected.
    #[arg(long)]
    pub strict: bool,
}

/// Convert fen amounts to yuan.
#[instrument(name = "cmd_yuan", skip_all, fields(count = args.values.len()))]
pub fn cmd_yuan(args: YuanArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let format = config.yuan_format(args.empty_format.as_deref(), args.cut_zero);
    debug!(?format, strict = args.strict, "executing yuan command");

    let reports: Vec<MoneyConversion> = read_values(args.values)?
        .iter()
        .map(|value| MoneyConversion::new(value.as_str(), fen_to_yuan(value.as_str(), &format)))
        .collect();
    finish(&reports, global_json, args.strict)
}

/// Convert yuan amounts to fen.
#[instrument(name = "cmd_fen", skip_all, fields(count = args.values.len()))]
pub fn cmd_fen(
    args: FenArgs,
    global_json: bool,
    config_empty_format: Option<&str>,
) -> anyhow::Result<()> {
    let empty = args.empty_format.as_deref().or(config_empty_format);
    debug!(?empty, strict = args.strict, "executing fen command");

    let reports: Vec<MoneyConversion> = read_values(args.values)?
        .iter()
        .map(|value| MoneyConversion::new(value.as_str(), yuan_to_fen(value.as_str(), empty)))
        .collect();
    finish(&reports, global_json, args.strict)
}

fn finish(reports: &[MoneyConversion], global_json: bool, strict: bool) -> anyhow::Result<()> {
    if global_json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            if report.ok {
                println!("{}", report.output);
            } else {
                let input = report.input.as_deref().unwrap_or_default();
                eprintln!(
                    "{} not a number: {input:?}",
                    "error:".if_supports_color(Stream::Stderr, |text| text.red())
                );
                println!();
            }
        }
    }
    let rejected = reports.iter().filter(|report| !report.ok).count();
    check_strict(rejected, reports.len(), strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yuan_uses_config_defaults() {
        let config = Config {
            cut_zero: true,
            ..Config::default()
        };
        let args = YuanArgs {
            values: vec!["2000".to_string(), String::new()],
            strict: true,
            ..YuanArgs::default()
        };
        assert!(cmd_yuan(args, true, &config).is_ok());
    }

    #[test]
    fn yuan_strict_rejects_exponent() {
        let args = YuanArgs {
            values: vec!["2e3".to_string()],
            strict: true,
            ..YuanArgs::default()
        };
        assert!(cmd_yuan(args, false, &Config::default()).is_err());
    }

    #[test]
    fn fen_accepts_signed_amounts() {
        let args = FenArgs {
            values: vec!["-10.0201".to_string()],
            strict: true,
            ..FenArgs::default()
        };
        assert!(cmd_fen(args, false, None).is_ok());
    }

    #[test]
    fn fen_strict_rejects_leading_point() {
        let args = FenArgs {
            values: vec![".2".to_string()],
            strict: true,
            ..FenArgs::default()
        };
        assert!(cmd_fen(args, true, Some("--")).is_err());
    }
}
