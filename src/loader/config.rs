//! Runtime configuration for a load.
//!
//! Resolution order, lowest priority first: built-in defaults, the JSON
//! configuration file, environment variables, command-line flags.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{ConfigError, ConfigFile};
use crate::db::PostgresConfig;

pub const DEFAULT_TOOL: &str = "ogr2ogr";
pub const DEFAULT_SOURCE: &str = "costard_craters_min_3.json";

/// Environment variable naming the `ogr2ogr` executable.
pub const TOOL_ENV: &str = "OGR2OGR";

/// Everything needed to form the load command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderConfig {
    pub tool: String,
    pub source: PathBuf,
    pub database: PostgresConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            source: PathBuf::from(DEFAULT_SOURCE),
            database: PostgresConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the resolved value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub tool: Option<String>,
    pub source: Option<PathBuf>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl LoaderConfig {
    /// Resolve defaults, config file and process environment.
    ///
    /// Command-line overrides are applied later by each command.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_with(config_path, &dir, |key| std::env::var(key).ok())
    }

    /// [`resolve`](Self::resolve) with an explicit working directory and
    /// environment lookup.
    pub fn resolve_with<F>(
        config_path: Option<&Path>,
        dir: &Path,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match ConfigFile::discover(config_path, dir)? {
            Some(file) => {
                debug!("applying configuration file");
                config.apply_file(&file);
            }
            None => debug!("no configuration file, using defaults"),
        }

        config.apply_env(lookup)?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(tool) = &file.tool {
            self.tool = tool.clone();
        }
        if let Some(source) = &file.source {
            self.source = source.clone();
        }

        let db = &file.database;
        if let Some(database) = &db.database {
            self.database.database = database.clone();
        }
        if let Some(user) = &db.user {
            self.database.user = user.clone();
        }
        if let Some(password) = &db.password {
            self.database.password = password.clone();
        }
        if db.host.is_some() {
            self.database.host = db.host.clone();
        }
        if db.port.is_some() {
            self.database.port = db.port;
        }
    }

    /// Overlay `OGR2OGR` and the libpq `PG*` variables. Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tool) = lookup(TOOL_ENV).filter(|tool| !tool.is_empty()) {
            self.tool = tool;
        }
        self.database.apply_env(&lookup)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(tool) = &overrides.tool {
            self.tool = tool.clone();
        }
        if let Some(source) = &overrides.source {
            self.source = source.clone();
        }
        if let Some(database) = &overrides.database {
            self.database.database = database.clone();
        }
        if let Some(user) = &overrides.user {
            self.database.user = user.clone();
        }
        if let Some(password) = &overrides.password {
            self.database.password = password.clone();
        }
        if overrides.host.is_some() {
            self.database.host = overrides.host.clone();
        }
        if overrides.port.is_some() {
            self.database.port = overrides.port;
        }
    }

    /// Copy with the database password redacted.
    pub fn redacted(&self) -> Self {
        Self {
            database: self.database.redacted(),
            ..self.clone()
        }
    }
}
