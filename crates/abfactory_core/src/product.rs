//! Product capability interfaces and their concrete variants.
//!
//! Each distinct product of a family has a base trait, and every variant of
//! that product implements it. Client code holds `Box<dyn ProductA>` or
//! `Box<dyn ProductB>` and never names a concrete variant.

use crate::family::Family;

/// Capability shared by every variant of product A.
pub trait ProductA: Send + Sync {
    /// Describe the variant that produced this value.
    fn useful_function_a(&self) -> String;

    /// Family this variant belongs to.
    fn family(&self) -> Family;
}

/// Capability shared by every variant of product B.
pub trait ProductB: Send + Sync {
    /// Describe the variant that produced this value.
    fn useful_function_b(&self) -> String;

    /// Family this variant belongs to.
    fn family(&self) -> Family;

    /// Work together with a product A.
    ///
    /// Any `ProductA` is accepted, but the result only makes sense when the
    /// collaborator comes from the same family, which is what factories
    /// guarantee.
    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String {
        format!(
            "The result of the B{} collaborating with ( {} )",
            self.family().index(),
            collaborator.useful_function_a()
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA1;

impl ProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of Product-A1".to_string()
    }

    fn family(&self) -> Family {
        Family::Family1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl ProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of Product-A2".to_string()
    }

    fn family(&self) -> Family {
        Family::Family2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB1;

impl ProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of Product-B1".to_string()
    }

    fn family(&self) -> Family {
        Family::Family1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl ProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of Product-B2".to_string()
    }

    fn family(&self) -> Family {
        Family::Family2
    }
}
