//! Abstract factory trait and the concrete factory for each family.
//!
//! A factory declares one creation method per product type and returns the
//! product capability, not the concrete variant. Each concrete factory
//! produces a single family, so the products it hands out are always
//! compatible with each other.

use rand::Rng;
use tracing::debug;

use crate::family::Family;
use crate::product::{
    ConcreteProductA1, ConcreteProductA2, ConcreteProductB1, ConcreteProductB2, ProductA,
    ProductB,
};

/// Creates the products of one family.
pub trait AbstractFactory: Send + Sync {
    /// Family every product of this factory belongs to.
    fn family(&self) -> Family;

    fn create_product_a(&self) -> Box<dyn ProductA>;

    fn create_product_b(&self) -> Box<dyn ProductB>;
}

/// Produces `ConcreteProductA1` and `ConcreteProductB1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn family(&self) -> Family {
        Family::Family1
    }

    fn create_product_a(&self) -> Box<dyn ProductA> {
        debug!("Creating product A for {}", Family::Family1);
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        debug!("Creating product B for {}", Family::Family1);
        Box::new(ConcreteProductB1)
    }
}

/// Produces `ConcreteProductA2` and `ConcreteProductB2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn family(&self) -> Family {
        Family::Family2
    }

    fn create_product_a(&self) -> Box<dyn ProductA> {
        debug!("Creating product A for {}", Family::Family2);
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        debug!("Creating product B for {}", Family::Family2);
        Box::new(ConcreteProductB2)
    }
}

/// Get the factory for a family.
pub fn factory_for(family: Family) -> Box<dyn AbstractFactory> {
    match family {
        Family::Family1 => Box::new(ConcreteFactory1),
        Family::Family2 => Box::new(ConcreteFactory2),
    }
}

/// Get the factory of a randomly chosen family.
pub fn random_factory<R: Rng + ?Sized>(rng: &mut R) -> Box<dyn AbstractFactory> {
    let families = Family::all();
    let family = families[rng.gen_range(0..families.len())];
    debug!("Picked {} at random", family);
    factory_for(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_factory1_products() {
        let factory = ConcreteFactory1;
        assert_eq!(
            factory.create_product_a().useful_function_a(),
            "The result of Product-A1"
        );
        assert_eq!(
            factory.create_product_b().useful_function_b(),
            "The result of Product-B1"
        );
    }

    #[test]
    fn test_factory2_products() {
        let factory = ConcreteFactory2;
        assert_eq!(
            factory.create_product_a().useful_function_a(),
            "The result of Product-A2"
        );
        assert_eq!(
            factory.create_product_b().useful_function_b(),
            "The result of Product-B2"
        );
    }

    #[test]
    fn test_factories_produce_matched_families() {
        for family in Family::all() {
            let factory = factory_for(family);
            assert_eq!(factory.family(), family);
            assert_eq!(factory.create_product_a().family(), family);
            assert_eq!(factory.create_product_b().family(), family);
        }
    }

    #[test]
    fn test_repeated_creation_is_consistent() {
        let factory = factory_for(Family::Family2);
        let first = factory.create_product_a().useful_function_a();
        let second = factory.create_product_a().useful_function_a();
        assert_eq!(first, second);

        let first = factory.create_product_b().useful_function_b();
        let second = factory.create_product_b().useful_function_b();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_factory_produces_matched_families() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..16 {
            let factory = random_factory(&mut rng);
            assert_eq!(factory.create_product_a().family(), factory.family());
            assert_eq!(factory.create_product_b().family(), factory.family());
        }
    }
}
