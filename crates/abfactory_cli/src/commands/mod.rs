//! CLI command definitions.
//!
//! Each subcommand drives the factory library in a different way.

use clap::{Parser, Subcommand};

pub mod check;
pub mod list;
pub mod run;

/// abfactory - build matched product families through abstract factories
#[derive(Parser)]
#[command(name = "abfactory")]
#[command(version, about = "abfactory - build matched product families through abstract factories")]
#[command(long_about = r#"
abfactory creates related products in matched families. Client code only
ever sees the abstract factory and product interfaces.

COMMANDS:
  list   → Show every registered family and the products it builds
  run    → Run the client against one family's factory
  check  → Verify that every factory builds products of a single family

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Family consistency failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered families
    List(list::ListArgs),

    /// Run the client against a factory
    Run(run::RunArgs),

    /// Verify family consistency of every factory
    Check(check::CheckArgs),
}
