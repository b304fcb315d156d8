mod execute;
mod output;

use clap::Args;

/// Generate only the TypeScript factory methods
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_gen models                      # Factory methods from ./models.json
  schema_gen -f blog.json models         # Factory methods from a specific document")]
pub struct ModelsCmd {}
