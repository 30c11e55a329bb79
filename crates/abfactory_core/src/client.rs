//! Client code that works with factories and products only through their
//! abstract interfaces.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::factory::{random_factory, AbstractFactory};
use crate::family::Family;
use crate::product::{ProductA, ProductB};

/// Outcome of running the client against one factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReport {
    pub family: Family,
    pub product_a: String,
    pub product_b: String,
    pub collaboration: String,
}

/// Exercise a factory without knowing which family it produces.
pub fn client_code(factory: &dyn AbstractFactory) -> ClientReport {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    debug!("Client received products from {}", factory.family());

    ClientReport {
        family: factory.family(),
        product_a: product_a.useful_function_a(),
        product_b: product_b.useful_function_b(),
        collaboration: product_b.another_useful_function_b(product_a.as_ref()),
    }
}

/// A matched product A and product B handed out together.
///
/// Pairs are only built from a single factory, so both products always
/// share a family.
pub struct ProductPair {
    product_a: Box<dyn ProductA>,
    product_b: Box<dyn ProductB>,
}

impl ProductPair {
    pub(crate) fn from_factory(factory: &dyn AbstractFactory) -> Self {
        Self {
            product_a: factory.create_product_a(),
            product_b: factory.create_product_b(),
        }
    }

    pub fn product_a(&self) -> &dyn ProductA {
        self.product_a.as_ref()
    }

    pub fn product_b(&self) -> &dyn ProductB {
        self.product_b.as_ref()
    }

    pub fn family(&self) -> Family {
        self.product_a.family()
    }
}

impl std::fmt::Debug for ProductPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductPair")
            .field("product_a", &self.product_a.useful_function_a())
            .field("product_b", &self.product_b.useful_function_b())
            .finish()
    }
}

/// Where a shop gets its factory for each sale.
enum FactorySource {
    Fixed(Box<dyn AbstractFactory>),
    Random(StdRng),
}

/// Storefront that sells product pairs.
///
/// A shop either wraps one injected factory, or draws a random family's
/// factory for every sale. Either way the shop code is the same, and each
/// pair comes from one factory.
pub struct Shop {
    source: FactorySource,
    sold: usize,
}

impl Shop {
    pub fn new(factory: Box<dyn AbstractFactory>) -> Self {
        Self {
            source: FactorySource::Fixed(factory),
            sold: 0,
        }
    }

    /// Shop that picks a random family for every pair.
    pub fn random() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Random shop with a reproducible sequence of families.
    pub fn random_seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            source: FactorySource::Random(rng),
            sold: 0,
        }
    }

    /// Family this shop sells, or `None` when it varies per sale.
    pub fn family(&self) -> Option<Family> {
        match &self.source {
            FactorySource::Fixed(factory) => Some(factory.family()),
            FactorySource::Random(_) => None,
        }
    }

    /// Number of pairs sold so far.
    pub fn sold(&self) -> usize {
        self.sold
    }

    /// Create and hand out a matched pair.
    pub fn sell_pair(&mut self) -> ProductPair {
        let pair = match &mut self.source {
            FactorySource::Fixed(factory) => ProductPair::from_factory(factory.as_ref()),
            FactorySource::Random(rng) => ProductPair::from_factory(random_factory(rng).as_ref()),
        };
        self.sold += 1;
        info!("Sold {} pair #{}: {:?}", pair.family(), self.sold, pair);
        pair
    }
}

impl std::fmt::Debug for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shop")
            .field("family", &self.family())
            .field("sold", &self.sold)
            .finish()
    }
}
