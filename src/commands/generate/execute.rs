use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::GenerateCmd;
use crate::commands::Execute;
use crate::schema::definition::Snapshot;
use crate::schema::emitters::{PrismaEmitter, TypeScriptEmitter};

/// Result of the generate command execution: both output panes.
#[derive(Debug, Default, Serialize)]
pub struct GenerateResult {
    /// Prisma schema text
    pub schema: String,
    /// TypeScript factory-method text
    pub models: String,
}

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(self, definition: &Path) -> Result<Self::Output, Box<dyn Error>> {
        let snapshot = Snapshot::from_file(definition)?;

        Ok(GenerateResult {
            schema: PrismaEmitter::emit(&snapshot.models, &snapshot.relations),
            models: TypeScriptEmitter::emit(&snapshot.models, &snapshot.relations),
        })
    }
}
