//! Run command - Run the client against one factory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use abfactory_core::{client_code, FactoryConfig, FactoryRegistry, Family};

#[derive(Args)]
pub struct RunArgs {
    /// Family to build (overrides the config file)
    #[arg(short, long, env = "ABFACTORY_FAMILY")]
    family: Option<Family>,

    /// Path to a YAML config file selecting the family
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let family = resolve_family(&args)?;
    info!("Running client against {}", family);

    let registry = FactoryRegistry::with_defaults();
    let factory = registry.get_required(family)?;
    let report = client_code(factory.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Client: testing client code with {}", report.family);
        println!("   {}", report.product_b);
        println!("   {}", report.collaboration);
    }

    Ok(())
}

/// Flag or env var first, then the config file, then the default family.
fn resolve_family(args: &RunArgs) -> Result<Family> {
    if let Some(family) = args.family {
        debug!("Family from arguments: {}", family);
        return Ok(family);
    }

    if let Some(path) = &args.config {
        let config = FactoryConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        debug!("Family from config: {}", config.family);
        return Ok(config.family);
    }

    Ok(Family::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(family: Option<Family>, config: Option<PathBuf>) -> RunArgs {
        RunArgs {
            family,
            config,
            json: false,
        }
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve_family(&args(None, None)).unwrap(), Family::Family1);
    }

    #[test]
    fn test_resolve_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("abfactory.yaml");
        fs::write(&path, "family: family2\n").unwrap();

        assert_eq!(
            resolve_family(&args(None, Some(path))).unwrap(),
            Family::Family2
        );
    }

    #[test]
    fn test_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("abfactory.yaml");
        fs::write(&path, "family: family2\n").unwrap();

        assert_eq!(
            resolve_family(&args(Some(Family::Family1), Some(path))).unwrap(),
            Family::Family1
        );
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = tempdir().unwrap();
        let result = resolve_family(&args(None, Some(dir.path().join("nope.yaml"))));
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_json() {
        let run = RunArgs {
            family: Some(Family::Family2),
            config: None,
            json: true,
        };
        execute(run).unwrap();
    }
}
