//! Output formatting for import command results.

use super::execute::ImportResult;
use crate::output::Outputable;

impl Outputable for ImportResult {
    fn to_table(&self) -> String {
        if self.streamed {
            return String::new();
        }

        let mut lines = vec![self.command.clone()];
        if let Some(outcome) = &self.outcome {
            lines.push(outcome.to_string());
        }
        lines.join("\n")
    }
}
