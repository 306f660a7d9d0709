//! The `ogr2ogr` invocation.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use super::config::LoaderConfig;

/// Output driver requested from `ogr2ogr`.
pub const OUTPUT_FORMAT: &str = "PostgreSQL";

/// Prefix that marks an OGR datasource as a PostgreSQL connection.
pub const DATASOURCE_PREFIX: &str = "PG:";

/// A fully formed load command: program plus argument vector.
///
/// The arguments are passed to the program directly, never through a shell.
/// [`Display`](fmt::Display) renders the equivalent shell line for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCommand {
    program: String,
    connection: String,
    source: PathBuf,
}

impl LoadCommand {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            program: config.tool.clone(),
            connection: config.database.build_connection_string(),
            source: config.source.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The `PG:` datasource argument, unquoted.
    pub fn datasource(&self) -> String {
        format!("{}{}", DATASOURCE_PREFIX, self.connection)
    }

    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-f"),
            OsString::from(OUTPUT_FORMAT),
            OsString::from(self.datasource()),
            self.source.clone().into_os_string(),
        ]
    }

    pub fn to_process(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

impl fmt::Display for LoadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -f {} {}\"{}\" {}",
            self.program,
            OUTPUT_FORMAT,
            DATASOURCE_PREFIX,
            self.connection,
            self.source.display()
        )
    }
}
