//! Check command: test a value against a numeric format.

use anyhow::bail;
use clap::Args;
use daxie_core::NumericCheck;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Format to test against.
    #[arg(value_enum)]
    pub kind: NumericCheck,

    /// Value to test.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    kind: NumericCheck,
    value: &'a str,
    matched: bool,
}

/// Run one numeric check. Prints `true` on a match and fails otherwise.
#[instrument(name = "cmd_check", skip_all, fields(kind = %args.kind))]
pub fn cmd_check(args: CheckArgs, global_json: bool) -> anyhow::Result<()> {
    let matched = args.kind.test(&args.value);
    debug!(value = %args.value, matched, "executing check command");

    if global_json {
        let report = CheckReport {
            kind: args.kind,
            value: &args.value,
            matched,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if matched {
        println!("true");
    } else {
        bail!("{:?} is not a valid {}", args.value, args.kind);
    }

    Ok(())
}
