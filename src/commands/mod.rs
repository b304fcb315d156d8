//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing

mod generate;
mod models;
mod schema;

pub use generate::GenerateCmd;
pub use models::ModelsCmd;
pub use schema::SchemaCmd;

use clap::Subcommand;
use std::error::Error;
use std::path::Path;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, definition: &Path) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the Prisma schema and the TypeScript factory methods
    Generate(GenerateCmd),

    /// Generate only the Prisma schema
    Schema(SchemaCmd),

    /// Generate only the TypeScript factory methods
    Models(ModelsCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, definition: &Path, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Generate(cmd) => {
                let result = cmd.execute(definition)?;
                Ok(result.format(format))
            }
            Command::Schema(cmd) => {
                let result = cmd.execute(definition)?;
                Ok(result.format(format))
            }
            Command::Models(cmd) => {
                let result = cmd.execute(definition)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
