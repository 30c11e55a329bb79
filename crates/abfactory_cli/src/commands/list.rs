//! List command - Show registered families.

use anyhow::Result;
use clap::Args;
use tracing::info;

use abfactory_core::FactoryRegistry;

#[derive(Args)]
pub struct ListArgs {
    /// Also show the collaboration result of each family
    #[arg(long)]
    detailed: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let registry = FactoryRegistry::with_defaults();
    info!("Listing {} families", registry.len());

    for family in registry.families() {
        let factory = registry.get_required(family)?;
        let a = factory.create_product_a();
        let b = factory.create_product_b();

        println!("{} (index {})", family, family.index());
        println!("   A: {}", a.useful_function_a());
        println!("   B: {}", b.useful_function_b());
        if args.detailed {
            println!("   B+A: {}", b.another_useful_function_b(a.as_ref()));
        }
    }

    Ok(())
}
