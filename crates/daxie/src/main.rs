//! daxie CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use daxie::{Cli, Commands, commands};
use daxie_core::config::ConfigLoader;
use tracing::{debug, info};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let stderr_filter =
        tracing_subscriber::EnvFilter::new(observability::stderr_level(cli.quiet, cli.verbose));
    let file_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, stderr_filter, file_filter)
        .context("failed to initialize logging/tracing")?;

    // Config is loaded before the subscriber exists, so report it here.
    info!(
        config_file = ?config_sources.primary_file(),
        log_level = config.log_level.as_str(),
        "configuration loaded"
    );

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let result = match command {
        Commands::Number(args) => commands::number::cmd_number(args, cli.json),
        Commands::Currency(args) => commands::currency::cmd_currency(
            args,
            cli.json,
            config.currency_empty_format.as_deref(),
        ),
        Commands::Yuan(args) => commands::money::cmd_yuan(args, cli.json, &config),
        Commands::Fen(args) => {
            commands::money::cmd_fen(args, cli.json, config.fen_empty_format.as_deref())
        }
        Commands::Check(args) => commands::check::cmd_check(args, cli.json),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, config))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
