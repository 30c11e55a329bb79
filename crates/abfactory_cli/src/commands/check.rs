//! Check command - Verify every factory builds a single family.

use anyhow::Result;
use clap::Args;
use tracing::info;

use abfactory_core::FactoryRegistry;

#[derive(Args)]
pub struct CheckArgs {}

pub fn execute(_args: CheckArgs) -> Result<()> {
    let registry = FactoryRegistry::with_defaults();
    info!("Checking {} factories", registry.len());

    registry.verify_families()?;

    for family in registry.families() {
        println!("   ✅ {} factory builds matched products", family);
    }
    println!("All factories consistent");
    Ok(())
}
