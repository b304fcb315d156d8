use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::ModelsCmd;
use crate::commands::Execute;
use crate::schema::definition::Snapshot;
use crate::schema::emitters::TypeScriptEmitter;

/// Result of the models command execution
#[derive(Debug, Default, Serialize)]
pub struct ModelsResult {
    /// TypeScript factory-method text
    pub models: String,
}

impl Execute for ModelsCmd {
    type Output = ModelsResult;

    fn execute(self, definition: &Path) -> Result<Self::Output, Box<dyn Error>> {
        let snapshot = Snapshot::from_file(definition)?;

        Ok(ModelsResult {
            models: TypeScriptEmitter::emit(&snapshot.models, &snapshot.relations),
        })
    }
}
