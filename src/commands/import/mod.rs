mod cli_tests;
mod execute;
mod output;
mod output_tests;

pub use execute::ImportResult;

use std::path::PathBuf;

use clap::Args;

use crate::cli::ConnectionArgs;
use crate::loader::Overrides;

/// Load a GeoJSON file into PostgreSQL with ogr2ogr
#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  geoload                                   # Load costard_craters_min_3.json into geomars
  geoload import -f craters.json -d mars    # Load another file into another database
  geoload import --dry-run                  # Print the ogr2ogr command without running it")]
pub struct ImportCmd {
    /// GeoJSON file to load [default: costard_craters_min_3.json]
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// ogr2ogr executable to run [default: ogr2ogr]
    #[arg(short, long)]
    pub tool: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the command without running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl ImportCmd {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            tool: self.tool.clone(),
            source: self.file.clone(),
            ..self.connection.overrides()
        }
    }
}
