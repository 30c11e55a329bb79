//! Factory selection from a YAML config file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FactoryError, FactoryResult};
use crate::factory::{factory_for, AbstractFactory};
use crate::family::Family;

/// Which family to build, as read from `abfactory.yaml`.
///
/// ```yaml
/// family: family2
/// label: storefront
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactoryConfig {
    #[serde(default)]
    pub family: Family,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FactoryConfig {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> FactoryResult<Self> {
        let path = path.as_ref();
        debug!("Reading factory config from {:?}", path);

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| FactoryError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the config as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> FactoryResult<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the factory this config selects.
    pub fn factory(&self) -> Box<dyn AbstractFactory> {
        factory_for(self.family)
    }
}
