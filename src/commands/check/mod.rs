mod execute;
mod output;

pub use execute::CheckResult;

use clap::Args;

use crate::cli::ConnectionArgs;

/// Check that the target database is reachable and has PostGIS
#[derive(Args, Debug, Default)]
#[command(after_help = "\
Without a host or port, check connects over TCP to localhost:5432. ogr2ogr
goes through libpq instead, which may use the local Unix socket, so set
--host when the server only accepts socket connections.

Examples:
  geoload check                          # Check the configured database
  geoload check --host db.local -p 5433  # Check another server")]
pub struct CheckCmd {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}
