//! Factory registry for selecting a factory by family.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{FactoryError, FactoryResult};
use crate::factory::{AbstractFactory, ConcreteFactory1, ConcreteFactory2};
use crate::family::Family;

/// A registry of factory implementations.
///
/// The registry maps each family to the factory that produces it, so callers
/// can pick a factory from configuration instead of naming a concrete type.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: BTreeMap<Family, Arc<dyn AbstractFactory>>,
}

impl FactoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in factory of every family.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ConcreteFactory1));
        registry.register(Arc::new(ConcreteFactory2));
        registry
    }

    /// Register a factory under the family it reports.
    ///
    /// An existing factory for the same family is replaced.
    pub fn register(&mut self, factory: Arc<dyn AbstractFactory>) {
        let family = factory.family();
        debug!("Registering factory: {}", family);
        self.factories.insert(family, factory);
    }

    /// Get the factory for a family.
    pub fn get(&self, family: Family) -> Option<Arc<dyn AbstractFactory>> {
        self.factories.get(&family).cloned()
    }

    /// Get the factory for a family, returning an error if none is registered.
    pub fn get_required(&self, family: Family) -> FactoryResult<Arc<dyn AbstractFactory>> {
        self.get(family)
            .ok_or_else(|| FactoryError::FactoryNotFound(family.to_string()))
    }

    pub fn contains(&self, family: Family) -> bool {
        self.factories.contains_key(&family)
    }

    /// Registered families, in family order.
    pub fn families(&self) -> Vec<Family> {
        self.factories.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Remove the factory for a family.
    pub fn unregister(&mut self, family: Family) -> Option<Arc<dyn AbstractFactory>> {
        debug!("Unregistering factory: {}", family);
        self.factories.remove(&family)
    }

    /// Check that every registered factory hands out products of its own family.
    ///
    /// Returns the first mismatch found.
    pub fn verify_families(&self) -> FactoryResult<()> {
        for (family, factory) in &self.factories {
            let product_a = factory.create_product_a().family();
            let product_b = factory.create_product_b().family();

            if product_a != *family || product_b != *family {
                warn!(
                    "Factory {} produced mismatched products ({} / {})",
                    family, product_a, product_b
                );
                return Err(FactoryError::FamilyMismatch {
                    factory: *family,
                    product_a,
                    product_b,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
