mod execute;
mod output;

pub use execute::ConfigResult;

use std::path::PathBuf;

use clap::Args;

use crate::cli::ConnectionArgs;
use crate::loader::Overrides;

/// Show the resolved configuration (password redacted)
#[derive(Args, Debug, Default)]
pub struct ConfigCmd {
    /// GeoJSON file to load
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// ogr2ogr executable to run
    #[arg(short, long)]
    pub tool: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl ConfigCmd {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            tool: self.tool.clone(),
            source: self.file.clone(),
            ..self.connection.overrides()
        }
    }
}
