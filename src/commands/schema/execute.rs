use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::SchemaCmd;
use crate::commands::Execute;
use crate::schema::definition::Snapshot;
use crate::schema::emitters::PrismaEmitter;

/// Result of the schema command execution
#[derive(Debug, Default, Serialize)]
pub struct SchemaResult {
    /// Prisma schema text
    pub schema: String,
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    fn execute(self, definition: &Path) -> Result<Self::Output, Box<dyn Error>> {
        let snapshot = Snapshot::from_file(definition)?;

        Ok(SchemaResult {
            schema: PrismaEmitter::emit(&snapshot.models, &snapshot.relations),
        })
    }
}
