//! CLI for inspecting Charles capture sessions.

mod commands;

use anyhow::Result;
use chsess_core::config;
use chsess_core::SessionStore;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

use commands::{run_check, run_config_path, run_decode, run_show};

/// Top-level CLI for chsess.
#[derive(Debug, Parser)]
#[command(name = "chsess")]
#[command(about = "chsess: replayable headers and params from Charles captures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which extracted map to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    Headers,
    Params,
    #[default]
    All,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load a capture from `<root>/charles/ios/` and print the extracted session.
    Show {
        /// Capture filename (defaults to `capture_file` from config).
        file: Option<String>,
        /// Print JSON instead of `name: value` lines.
        #[arg(long)]
        json: bool,
        /// Restrict output to one map.
        #[arg(long, value_enum, default_value_t = Section::All)]
        section: Section,
    },

    /// Load a capture and summarise which allow-listed headers are filled.
    Check {
        /// Capture filename (defaults to `capture_file` from config).
        file: Option<String>,
    },

    /// Decode a capture at an arbitrary path, bypassing the capture root.
    Decode {
        /// Path to the `.chlsj` file.
        path: String,
        /// Print JSON instead of `name: value` lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::ConfigPath = cli.command {
            return run_config_path();
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = SessionStore::with_source(cfg.capture_source());

        match cli.command {
            CliCommand::Show {
                file,
                json,
                section,
            } => {
                let name = file.unwrap_or_else(|| cfg.capture_file.clone());
                run_show(&store, &name, section, json)?;
            }
            CliCommand::Check { file } => {
                let name = file.unwrap_or_else(|| cfg.capture_file.clone());
                run_check(&store, &name)?;
            }
            CliCommand::Decode { path, json } => {
                run_decode(&store, Path::new(&path), json)?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
