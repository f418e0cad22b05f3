//! gantry-status — example status-check function.
//!
//! Answers every API Gateway request with the configured service name and
//! version plus an echo of the request.
//!
//! # Usage
//!
//! ```text
//! gantry-status --config status.toml
//! gantry-status --name "Orders API" --api-version 2.3.1 --json-logs
//! ```

mod config;
mod status;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::StatusConfig;
use crate::status::StatusHandler;

#[derive(Parser)]
#[command(name = "gantry-status", about = "Gantry status-check function")]
struct Cli {
    /// TOML file with `name` and `version` keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Service name reported by the endpoint.
    #[arg(long)]
    name: Option<String>,

    /// Service version reported by the endpoint.
    #[arg(long)]
    api_version: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let status = match &cli.config {
        Some(path) => StatusConfig::from_file(path)?,
        None => StatusConfig::default(),
    }
    .with_overrides(cli.name, cli.api_version);

    info!(name = %status.name, version = %status.version, "starting status function");

    gantry::start(StatusHandler::new(status))?;
    Ok(())
}

fn init_tracing(json: bool) {
    // CloudWatch adds its own timestamps and does not render ANSI.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,gantry=debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time();

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "gantry-status",
            "--name",
            "Orders API",
            "--api-version",
            "2.3.1",
            "--json-logs",
        ]);
        assert_eq!(cli.name.as_deref(), Some("Orders API"));
        assert_eq!(cli.api_version.as_deref(), Some("2.3.1"));
        assert!(cli.json_logs);
        assert!(cli.config.is_none());
    }
}
