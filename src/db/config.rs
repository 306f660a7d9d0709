//! PostgreSQL connection settings for the load target.
//!
//! The same settings feed two consumers: the `PG:` datasource handed to
//! `ogr2ogr` (a libpq `key=value` descriptor) and the `postgres` client used by
//! the `check` command.

use serde::Serialize;

use super::escape::quote_conninfo_value;
use crate::config::ConfigError;

pub const DEFAULT_DATABASE: &str = "geomars";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;

/// Placeholder shown instead of the password in human-facing output.
pub const REDACTED: &str = "********";

/// Connection settings for the target database.
///
/// `host` and `port` are optional: when unset they are left out of the
/// descriptor and libpq applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostgresConfig {
    pub database: String,
    pub user: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            host: None,
            port: None,
        }
    }
}

impl PostgresConfig {
    /// Build the libpq connection descriptor, password in clear text.
    ///
    /// With default settings this is `dbname=geomars user=postgres password=password`.
    pub fn build_connection_string(&self) -> String {
        self.conninfo(&self.password)
    }

    /// Same as [`build_connection_string`](Self::build_connection_string) with
    /// the password replaced by [`REDACTED`].
    pub fn redacted_connection_string(&self) -> String {
        self.conninfo(REDACTED)
    }

    /// Copy of these settings with the password replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        Self {
            password: REDACTED.to_string(),
            ..self.clone()
        }
    }

    fn conninfo(&self, password: &str) -> String {
        let mut parts = vec![
            format!("dbname={}", quote_conninfo_value(&self.database)),
            format!("user={}", quote_conninfo_value(&self.user)),
            format!("password={}", quote_conninfo_value(password)),
        ];
        if let Some(host) = &self.host {
            parts.push(format!("host={}", quote_conninfo_value(host)));
        }
        if let Some(port) = self.port {
            parts.push(format!("port={}", port));
        }
        parts.join(" ")
    }

    /// Overlay the libpq environment variables (`PGDATABASE`, `PGUSER`,
    /// `PGPASSWORD`, `PGHOST`, `PGPORT`) found through `lookup`. Empty values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PGPORT` is not a valid port number.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(database) = var("PGDATABASE") {
            self.database = database;
        }
        if let Some(user) = var("PGUSER") {
            self.user = user;
        }
        if let Some(password) = var("PGPASSWORD") {
            self.password = password;
        }
        if let Some(host) = var("PGHOST") {
            self.host = Some(host);
        }
        if let Some(port) = var("PGPORT") {
            self.port = Some(parse_port(&port)?);
        }
        Ok(())
    }

    /// Client configuration for the `postgres` crate.
    ///
    /// Unlike the descriptor, host and port always resolve here, falling back
    /// to `localhost:5432`.
    pub fn to_client_config(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .host(self.host.as_deref().unwrap_or(DEFAULT_HOST))
            .port(self.port.unwrap_or(DEFAULT_PORT));
        config
    }
}

/// Parse a port number from a string value.
pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort {
            value: value.to_string(),
        })
}
