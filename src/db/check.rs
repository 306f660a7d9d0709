//! Connectivity probe for the target database.

use postgres::NoTls;
use serde::Serialize;
use tracing::debug;

use super::config::PostgresConfig;
use super::DbError;

/// What the target database reported about itself.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub server_version: String,
    /// Installed PostGIS extension version, `None` when PostGIS is absent.
    pub postgis_version: Option<String>,
}

/// Connect to the configured database and collect [`ServerInfo`].
///
/// # Errors
///
/// Returns [`DbError::ConnectionFailed`] if the server cannot be reached or
/// rejects the credentials, and [`DbError::QueryFailed`] if either probe
/// query fails.
pub fn check_connection(config: &PostgresConfig) -> Result<ServerInfo, DbError> {
    debug!(connection = %config.redacted_connection_string(), "connecting to database");

    let mut client = config
        .to_client_config()
        .connect(NoTls)
        .map_err(|e| DbError::ConnectionFailed {
            message: e.to_string(),
        })?;

    let row = client
        .query_one("SELECT current_setting('server_version')", &[])
        .map_err(|e| DbError::QueryFailed {
            message: e.to_string(),
        })?;
    let server_version: String = row.get(0);

    let rows = client
        .query(
            "SELECT extversion FROM pg_extension WHERE extname = 'postgis'",
            &[],
        )
        .map_err(|e| DbError::QueryFailed {
            message: e.to_string(),
        })?;
    let postgis_version = rows.first().map(|row| row.get::<_, String>(0));

    Ok(ServerInfo {
        server_version,
        postgis_version,
    })
}
