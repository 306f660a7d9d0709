//! Output formatting for check command results.

use super::execute::CheckResult;
use crate::output::Outputable;

impl Outputable for CheckResult {
    fn to_table(&self) -> String {
        let postgis = self
            .server
            .postgis_version
            .as_deref()
            .unwrap_or("not installed");

        format!(
            "Connected: {}\nServer version: {}\nPostGIS: {}",
            self.target, self.server.server_version, postgis
        )
    }
}
