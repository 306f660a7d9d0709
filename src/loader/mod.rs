//! Building and running the `ogr2ogr` load command.
//!
//! - [`LoaderConfig`] holds the tool, the source file and the target database.
//! - [`LoadCommand`] turns that into a program and argument vector.
//! - [`CommandRunner`] launches it and returns a [`RunOutcome`].

mod command;
mod config;
mod outcome;
mod runner;

pub use command::{LoadCommand, DATASOURCE_PREFIX, OUTPUT_FORMAT};
pub use config::{LoaderConfig, Overrides, DEFAULT_SOURCE, DEFAULT_TOOL, TOOL_ENV};
pub use outcome::RunOutcome;
pub use runner::CommandRunner;
