//! Info command implementation

use clap::Args;
use daxie_core::config::{Config, ConfigSources};
use daxie_core::money::{DEFAULT_FEN_EMPTY, DEFAULT_YUAN_EMPTY};
use daxie_core::numeral::EMPTY_AMOUNT;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    currency_empty_format: String,
    yuan_empty_format: String,
    fen_empty_format: String,
    cut_zero: bool,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            currency_empty_format: config
                .currency_empty_format
                .as_deref()
                .unwrap_or(EMPTY_AMOUNT)
                .to_string(),
            yuan_empty_format: config
                .yuan_empty_format
                .as_deref()
                .unwrap_or(DEFAULT_YUAN_EMPTY)
                .to_string(),
            fen_empty_format: config
                .fen_empty_format
                .as_deref()
                .unwrap_or(DEFAULT_FEN_EMPTY)
                .to_string(),
            cut_zero: config.cut_zero,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Formatting".bold().underline());
    println!(
        "{}: {}",
        "Blank currency".dimmed(),
        full_info.config.currency_empty_format
    );
    println!(
        "{}: {}",
        "Blank yuan".dimmed(),
        full_info.config.yuan_empty_format
    );
    println!(
        "{}: {}",
        "Blank fen".dimmed(),
        full_info.config.fen_empty_format
    );
    println!("{}: {}", "Cut zero".dimmed(), full_info.config.cut_zero);

    Ok(())
}
