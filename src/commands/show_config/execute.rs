use std::error::Error;

use serde::Serialize;

use super::ConfigCmd;
use crate::commands::Execute;
use crate::db::PostgresConfig;
use crate::loader::{LoadCommand, LoaderConfig};
use crate::output::OutputFormat;

/// Resolved configuration with the password redacted
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResult {
    pub tool: String,
    pub source: String,
    pub database: PostgresConfig,
    pub connection: String,
    pub command: String,
}

impl Execute for ConfigCmd {
    type Output = ConfigResult;

    fn execute(
        self,
        mut config: LoaderConfig,
        _format: OutputFormat,
    ) -> Result<Self::Output, Box<dyn Error>> {
        config.apply_overrides(&self.overrides());
        let redacted = config.redacted();

        Ok(ConfigResult {
            command: LoadCommand::new(&redacted).to_string(),
            connection: redacted.database.build_connection_string(),
            tool: redacted.tool,
            source: redacted.source.display().to_string(),
            database: redacted.database,
        })
    }
}
