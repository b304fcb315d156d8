//! Output formatting for generate command results.

use super::execute::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    fn to_table(&self) -> String {
        if self.schema.is_empty() && self.models.is_empty() {
            return "No models defined.".to_string();
        }

        format!(
            "Prisma Schema:\n\n{}TypeScript Models:\n\n{}",
            self.schema, self.models
        )
        .trim_end()
        .to_string()
    }
}
