use std::error::Error;

use serde::Serialize;
use tracing::debug;

use super::ImportCmd;
use crate::commands::Execute;
use crate::loader::{CommandRunner, LoaderConfig, RunOutcome};
use crate::output::OutputFormat;

/// Result of the import command execution
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    /// The command line, as printed before launch
    pub command: String,
    pub dry_run: bool,
    /// `None` for a dry run
    pub outcome: Option<RunOutcome>,
    /// Set when the command line and outcome were already written to the console
    #[serde(skip)]
    pub streamed: bool,
}

impl Execute for ImportCmd {
    type Output = ImportResult;

    fn execute(
        self,
        mut config: LoaderConfig,
        format: OutputFormat,
    ) -> Result<Self::Output, Box<dyn Error>> {
        config.apply_overrides(&self.overrides());
        let runner = CommandRunner::new(config);
        let command = runner.command().to_string();

        if self.dry_run {
            debug!("dry run, not launching");
            return Ok(ImportResult {
                command,
                dry_run: true,
                outcome: None,
                streamed: false,
            });
        }

        // Table output keeps the console contract: command line on stdout
        // before launch, outcome on stderr after.
        let streamed = format == OutputFormat::Table;
        let outcome = if streamed {
            runner.run()
        } else {
            runner.execute()
        };

        Ok(ImportResult {
            command,
            dry_run: false,
            outcome: Some(outcome),
            streamed,
        })
    }
}
