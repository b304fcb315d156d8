//! Output formatting for models command results.

use super::execute::ModelsResult;
use crate::output::Outputable;

impl Outputable for ModelsResult {
    fn to_table(&self) -> String {
        if self.models.is_empty() {
            return "No models defined.".to_string();
        }

        self.models.trim_end().to_string()
    }
}
