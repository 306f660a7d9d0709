//! Output formatting for config command results.

use super::execute::ConfigResult;
use crate::output::Outputable;

impl Outputable for ConfigResult {
    fn to_table(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Tool:       {}\n", self.tool));
        output.push_str(&format!("Source:     {}\n", self.source));
        output.push_str(&format!("Connection: {}\n", self.connection));
        output.push_str(&format!("Command:    {}", self.command));
        output
    }
}
