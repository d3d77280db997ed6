//! Runtime values a namespace name can be bound to.
//!
//! The frontier analysis only cares about a value's *category*: modules and
//! callables feed the traversal, bare code fragments are scanned, instances
//! may expose an owning provider, and plain literals contribute nothing.

use serde::{Deserialize, Serialize};

use crate::id::{CallableId, ModuleId, UnitId};

/// A value bound to a name in a namespace, a module attribute table, or a
/// compiled unit's constant table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A module (provider) object.
    Module(ModuleId),
    /// A callable with its own compiled body and captured bindings.
    Callable(CallableId),
    /// A bare compiled fragment bound directly to a name or stored as a
    /// constant -- comprehension bodies, lambda bodies, nested `def` bodies.
    Code(UnitId),
    /// Any other object. May expose the canonical name of the provider it
    /// originates from (a bound method, a class instance), which is all the
    /// analysis can use it for.
    Instance { provider: Option<String> },
    /// Absent/null literal.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Convenience constructor for an instance with a known provider.
    pub fn instance_of(provider: &str) -> Self {
        Value::Instance {
            provider: Some(provider.to_string()),
        }
    }

    /// Convenience constructor for an opaque instance with no known provider.
    pub fn opaque() -> Self {
        Value::Instance { provider: None }
    }

    /// Returns `true` if this value is a module, callable, or bare code
    /// fragment -- the categories the traversal expands.
    pub fn is_traversable(&self) -> bool {
        matches!(
            self,
            Value::Module(_) | Value::Callable(_) | Value::Code(_)
        )
    }
}
