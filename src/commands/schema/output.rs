//! Output formatting for schema command results.

use super::execute::SchemaResult;
use crate::output::Outputable;

impl Outputable for SchemaResult {
    fn to_table(&self) -> String {
        if self.schema.is_empty() {
            return "No models defined.".to_string();
        }

        self.schema.trim_end().to_string()
    }
}
