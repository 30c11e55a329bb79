//! Error types for the factory module.

use std::path::PathBuf;
use thiserror::Error;

use crate::family::Family;

/// Result type alias for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Errors that can occur around factory selection and configuration.
///
/// Products themselves never fail; these only surface from lookups,
/// parsing and consistency checks.
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Unknown family: {0}")]
    UnknownFamily(String),

    #[error("Factory not found: {0}")]
    FactoryNotFound(String),

    #[error("Family mismatch in {factory} factory: product A is {product_a}, product B is {product_b}")]
    FamilyMismatch {
        factory: Family,
        product_a: Family,
        product_b: Family,
    },

    #[error("Invalid config in file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
