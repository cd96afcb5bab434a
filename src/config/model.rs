//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::module::Module;
use crate::names::{generate_class_names, ClassNames};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix applied to every generated class name. Empty by default.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

/// A component module declared in config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// User-facing label (e.g. `"Accordion"`).
    pub name: String,
    /// BEM block name, e.g. `"accordion"`.
    pub block: String,
    #[serde(default)]
    pub elements: Vec<String>,
}

impl AppConfig {
    /// Class names for `block` under the configured namespace.
    pub fn class_names<S: AsRef<str>>(&self, block: &str, elements: &[S]) -> Result<ClassNames> {
        generate_class_names(&self.namespace, block, elements)
    }

    /// Build every configured module under the configured namespace.
    pub fn modules(&self) -> Result<Vec<Module>> {
        self.modules
            .iter()
            .map(|m| m.to_module(&self.namespace))
            .collect()
    }
}

impl ModuleConfig {
    pub fn to_module(&self, namespace: &str) -> Result<Module> {
        Module::new(namespace, self.name.clone(), self.block.as_str(), self.elements.as_slice())
    }
}
