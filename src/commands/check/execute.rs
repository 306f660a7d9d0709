use std::error::Error;

use serde::Serialize;

use super::CheckCmd;
use crate::commands::Execute;
use crate::db::{check_connection, ServerInfo};
use crate::loader::LoaderConfig;
use crate::output::OutputFormat;

/// Result of the check command execution
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Connection descriptor with the password redacted
    pub target: String,
    pub server: ServerInfo,
}

impl Execute for CheckCmd {
    type Output = CheckResult;

    fn execute(
        self,
        mut config: LoaderConfig,
        _format: OutputFormat,
    ) -> Result<Self::Output, Box<dyn Error>> {
        config.apply_overrides(&self.connection.overrides());

        let server = check_connection(&config.database)?;

        Ok(CheckResult {
            target: config.database.redacted_connection_string(),
            server,
        })
    }
}
