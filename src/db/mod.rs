//! Target database settings and connectivity.
//!
//! The loader never talks to PostgreSQL for the import itself; `ogr2ogr`
//! does. This module owns the connection settings it is given and the
//! optional `check` probe that connects directly with the `postgres` crate.

mod check;
mod config;
mod escape;

pub use check::{check_connection, ServerInfo};
pub use config::{
    parse_port, PostgresConfig, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT,
    DEFAULT_USER, REDACTED,
};
pub use escape::quote_conninfo_value;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to PostgreSQL: {message}")]
    ConnectionFailed { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },
}
