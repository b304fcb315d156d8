mod execute;
mod execute_tests;
mod output;
mod output_tests;

use clap::Args;

/// Generate only the Prisma schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_gen schema                      # Prisma schema from ./models.json
  schema_gen -f blog.json schema         # Prisma schema from a specific document")]
pub struct SchemaCmd {}
