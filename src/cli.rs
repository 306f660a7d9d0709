//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::loader::Overrides;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Load a GeoJSON file into PostgreSQL with ogr2ogr", long_about = None)]
pub struct Args {
    /// Path to a JSON configuration file
    ///
    /// If not specified, .geoload.json in the current directory is used when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    // `None` runs `import` with every option at its default
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Target database options shared by commands that connect or load.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Database name [default: geomars]
    #[arg(short = 'd', long)]
    pub dbname: Option<String>,

    /// Database user [default: postgres]
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// Database password
    #[arg(long)]
    pub password: Option<String>,

    /// Database host
    #[arg(long)]
    pub host: Option<String>,

    /// Database port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ConnectionArgs {
    /// Database overrides from these flags; tool and source are left unset.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            database: self.dbname.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            host: self.host.clone(),
            port: self.port,
            ..Overrides::default()
        }
    }
}
