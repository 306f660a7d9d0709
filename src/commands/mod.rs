//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `execute` module implementing [`Execute`]
//! - An `output` module implementing [`Outputable`] for its result

mod check;
mod import;
mod show_config;

pub use check::{CheckCmd, CheckResult};
pub use import::{ImportCmd, ImportResult};
pub use show_config::{ConfigCmd, ConfigResult};

use clap::Subcommand;
use std::error::Error;

use crate::loader::LoaderConfig;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
///
/// `config` is the configuration resolved from defaults, the config file and
/// the environment; each command applies its own flags on top.
pub trait Execute {
    type Output: Outputable;

    fn execute(
        self,
        config: LoaderConfig,
        format: OutputFormat,
    ) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the GeoJSON file into PostgreSQL (default)
    Import(ImportCmd),

    /// Check that the target database is reachable and has PostGIS
    Check(CheckCmd),

    /// Show the resolved configuration (password redacted)
    Config(ConfigCmd),
}

impl Default for Command {
    fn default() -> Self {
        Command::Import(ImportCmd::default())
    }
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: LoaderConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Import(cmd) => {
                let result = cmd.execute(config, format)?;
                Ok(result.format(format))
            }
            Command::Check(cmd) => {
                let result = cmd.execute(config, format)?;
                Ok(result.format(format))
            }
            Command::Config(cmd) => {
                let result = cmd.execute(config, format)?;
                Ok(result.format(format))
            }
        }
    }
}
