//! Module (provider) definitions.
//!
//! A [`ModuleDef`] is a symbol provider: a canonical dotted name plus an
//! attribute table. The canonical name is what the module contributes to a
//! frontier -- it is independent of whatever alias a namespace binds the
//! module under (`import numpy as np` still surfaces `numpy`). Submodules
//! are attributes bound to [`Value::Module`], which is the chain dotted-path
//! resolution walks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::ModuleId;
use crate::value::Value;

/// A provider object with a canonical dotted name and attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDef {
    /// Unique identity for this module.
    pub id: ModuleId,
    /// Canonical dotted name (`numpy.linalg`), the name reported to callers.
    pub name: String,
    /// Attribute table. Submodules, functions, and other exported symbols.
    attrs: IndexMap<String, Value>,
}

impl ModuleDef {
    pub fn new(id: ModuleId, name: &str) -> Self {
        ModuleDef {
            id,
            name: name.to_string(),
            attrs: IndexMap::new(),
        }
    }

    /// Binds an attribute, replacing any previous binding.
    pub fn set_attr(&mut self, name: &str, value: Value) {
        self.attrs.insert(name.to_string(), value);
    }

    /// Looks up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Iterates attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The final segment of the canonical dotted name.
    pub fn leaf_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}
