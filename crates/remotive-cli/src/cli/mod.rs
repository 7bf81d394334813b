//! CLI for remotive-csv.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remotive_core::config::{self, AppConfig};
use std::path::PathBuf;

use commands::{run_clean, run_export};

/// Top-level CLI. With no subcommand, runs `export` with configured defaults.
#[derive(Debug, Parser)]
#[command(name = "remotive-csv")]
#[command(about = "Export the Remotive remote-jobs feed to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the feed and write the CSV file.
    Export {
        /// Destination CSV file (overrides config `output`).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Feed URL (overrides config `endpoint`).
        #[arg(long)]
        url: Option<String>,
    },

    /// Fetch the feed and print the jobs with cleaned descriptions as JSON.
    Clean {
        /// Feed URL (overrides config `endpoint`).
        #[arg(long)]
        url: Option<String>,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Export {
            output: None,
            url: None,
        }
    }
}

/// Load config.toml and apply a `--url` override, if any.
fn load_config(url: Option<&str>) -> Result<AppConfig> {
    let mut cfg = config::load_or_init()?;
    if let Some(url) = url {
        cfg.set_endpoint(url)?;
    }
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command.unwrap_or_default() {
            CliCommand::Export { output, url } => {
                let cfg = load_config(url.as_deref())?;
                let output = output.unwrap_or_else(|| cfg.output.clone());
                run_export(&cfg, &output)?;
            }
            CliCommand::Clean { url } => run_clean(&load_config(url.as_deref())?)?,
        }

        Ok(())
    }
}
