//! Callable artifacts: a compiled body plus captured bindings.
//!
//! A [`Callable`] ties a root [`CompiledUnit`](crate::unit::CompiledUnit) to
//! the globals namespace it resolves names against and to the enclosing-scope
//! bindings it captured when it was created. Capturing records *values*, not
//! names -- an import executed inside an enclosing function, once bound, is
//! visible here even though no namespace ever saw it.
//!
//! Callables are never mutated after discovery; the analysis borrows them
//! read-only.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::{CallableId, NamespaceId, UnitId};
use crate::value::Value;

/// A function-like artifact with its own compiled body and captured bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callable {
    /// Unique identity for this callable.
    pub id: CallableId,
    /// Display name.
    pub name: String,
    /// The callable's own compiled body.
    pub unit: UnitId,
    /// The globals namespace the body resolves names against.
    pub globals: NamespaceId,
    /// Captured enclosing-scope bindings (closure cells), name -> value.
    /// Empty for top-level functions.
    pub enclosing: IndexMap<String, Value>,
    /// Canonical name of the owning module, once known. `None` for anonymous
    /// callables defined at the interactive toplevel.
    pub module: Option<String>,
}

impl Callable {
    /// A top-level callable with no captured bindings.
    pub fn new(
        id: CallableId,
        name: &str,
        unit: UnitId,
        globals: NamespaceId,
        module: Option<String>,
    ) -> Self {
        Callable {
            id,
            name: name.to_string(),
            unit,
            globals,
            enclosing: IndexMap::new(),
            module,
        }
    }

    /// A closure: captured enclosing bindings attached.
    pub fn closure(
        id: CallableId,
        name: &str,
        unit: UnitId,
        globals: NamespaceId,
        enclosing: IndexMap<String, Value>,
        module: Option<String>,
    ) -> Self {
        Callable {
            id,
            name: name.to_string(),
            unit,
            globals,
            enclosing,
            module,
        }
    }

    /// Returns `true` if this callable captured anything from an enclosing
    /// scope.
    pub fn is_closure(&self) -> bool {
        !self.enclosing.is_empty()
    }
}
