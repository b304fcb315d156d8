mod execute;
mod output;

use clap::Args;

/// Generate the Prisma schema and the TypeScript factory methods
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_gen generate                    # Both artifacts from ./models.json
  schema_gen -f blog.json generate       # Both artifacts from a specific document
  schema_gen generate --format json      # Machine-readable output")]
pub struct GenerateCmd {}
