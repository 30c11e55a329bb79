//! # abfactory_core
//!
//! Product families and abstract factories.
//!
//! A factory creates a whole family of related products without the caller
//! naming any concrete product type. Client code depends only on the
//! [`AbstractFactory`], [`ProductA`] and [`ProductB`] traits, so a different
//! family is a different factory and nothing else.
//!
//! ## Families
//!
//! | Family    | Factory            | Product A           | Product B           |
//! |-----------|--------------------|---------------------|---------------------|
//! | `family1` | `ConcreteFactory1` | `ConcreteProductA1` | `ConcreteProductB1` |
//! | `family2` | `ConcreteFactory2` | `ConcreteProductA2` | `ConcreteProductB2` |
//!
//! ## Example
//!
//! ```rust
//! use abfactory_core::{client_code, factory_for, Family};
//!
//! let factory = factory_for(Family::Family1);
//! let report = client_code(factory.as_ref());
//!
//! assert_eq!(report.product_a, "The result of Product-A1");
//! assert_eq!(report.product_b, "The result of Product-B1");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod family;
pub mod product;
pub mod registry;

pub use client::{client_code, ClientReport, ProductPair, Shop};
pub use config::FactoryConfig;
pub use error::{FactoryError, FactoryResult};
pub use factory::{
    factory_for, random_factory, AbstractFactory, ConcreteFactory1, ConcreteFactory2,
};
pub use family::Family;
pub use product::{
    ConcreteProductA1, ConcreteProductA2, ConcreteProductB1, ConcreteProductB2, ProductA,
    ProductB,
};
pub use registry::FactoryRegistry;
