use clap::Parser;

mod cli;
mod commands;
mod config;
mod output;
mod schema;
mod store;
#[macro_use]
mod test_macros;
#[cfg(test)]
pub mod fixtures;

use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let definition = config::resolve_definition_path(args.file);
    let output = args.command.run(&definition, args.format)?;
    println!("{}", output);
    Ok(())
}
