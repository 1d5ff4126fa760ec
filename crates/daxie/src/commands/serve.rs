//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use daxie_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio
}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let service = ProjectServer::new(config)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    info!("MCP server stopped");
    Ok(())
}
