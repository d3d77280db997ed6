//! Name-to-value bindings for a globals or builtins scope.
//!
//! A [`Namespace`] is the mutable mapping a compiled unit resolves global
//! names against. Nested units may carry a different namespace than the root
//! callable's -- a nested body keeps the globals context of the scope it was
//! defined in, not the scope it is eventually called from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An insertion-ordered `name -> Value` mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Namespace {
    bindings: IndexMap<String, Value>,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace {
            bindings: IndexMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks up a bound value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterates bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
