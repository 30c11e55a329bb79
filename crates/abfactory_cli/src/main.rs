//! abfactory CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Family consistency failure

use std::process::ExitCode;

use abfactory_core::FactoryError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const FAMILY_MISMATCH: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "abfactory=debug"
    } else if cli.quiet {
        "abfactory=warn"
    } else {
        "abfactory=info"
    };

    // Logging may already be initialized; keep going either way
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive(level.parse().expect("static directive"))
                .add_directive("warn".parse().expect("static directive")),
        )
        .try_init();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<FactoryError>() {
        Some(FactoryError::FamilyMismatch { .. }) => ExitCodes::FAMILY_MISMATCH,
        Some(FactoryError::UnknownFamily(_))
        | Some(FactoryError::FactoryNotFound(_))
        | Some(FactoryError::Config { .. }) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abfactory_core::Family;

    #[test]
    fn test_categorize_mismatch() {
        let err = anyhow::Error::new(FactoryError::FamilyMismatch {
            factory: Family::Family1,
            product_a: Family::Family1,
            product_b: Family::Family2,
        });
        assert_eq!(categorize_error(&err), ExitCodes::FAMILY_MISMATCH);
    }

    #[test]
    fn test_categorize_invalid_args() {
        let err = anyhow::Error::new(FactoryError::UnknownFamily("x".to_string()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_categorize_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
