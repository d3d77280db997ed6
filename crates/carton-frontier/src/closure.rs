//! Closure variable resolver.
//!
//! Partitions the names a callable's root body references into the scopes
//! that bind them: captured enclosing cells, the callable's globals
//! namespace, builtins, and unbound. The partitions are disjoint by
//! precedence (enclosing wins over globals, globals over builtins).
//!
//! Only the root unit's name table is consulted. Names that occur solely
//! inside nested fragments are invisible here -- that blind spot is exactly
//! what the bytecode scan in [`frontier`](crate::frontier) covers. A name
//! unbound *now* may become bound before the callable ever runs (and vice
//! versa); the resolver cannot see either case and simply reports what the
//! snapshot shows.

use indexmap::{IndexMap, IndexSet};

use carton_core::env::Environment;
use carton_core::id::CallableId;
use carton_core::value::Value;

use crate::error::FrontierError;

/// A callable's referenced names, partitioned by the scope that binds them.
#[derive(Debug, Clone, Default)]
pub struct ClosureVars {
    /// Captured enclosing-scope bindings (closure cells).
    pub enclosing: IndexMap<String, Value>,
    /// Names bound in the callable's globals namespace.
    pub globals: IndexMap<String, Value>,
    /// Names bound in the builtins namespace.
    pub builtins: IndexMap<String, Value>,
    /// Names referenced in the body but bound nowhere visible.
    pub unbound: IndexSet<String>,
}

/// Resolves a callable's referenced names against its visible scopes.
///
/// No side effects; the environment is only read.
pub fn resolve_closure_vars(
    env: &Environment,
    callable: CallableId,
) -> Result<ClosureVars, FrontierError> {
    let callable = env.callable(callable)?;
    let unit = env.unit(callable.unit)?;
    let globals = env.namespace(callable.globals)?;
    let builtins = env.namespace(env.builtins())?;

    let mut vars = ClosureVars {
        enclosing: callable.enclosing.clone(),
        ..ClosureVars::default()
    };

    for name in unit.names() {
        if vars.enclosing.contains_key(name)
            || vars.globals.contains_key(name)
            || vars.builtins.contains_key(name)
            || vars.unbound.contains(name)
        {
            continue;
        }

        if let Some(value) = globals.get(name) {
            vars.globals.insert(name.clone(), value.clone());
        } else if let Some(value) = builtins.get(name) {
            vars.builtins.insert(name.clone(), value.clone());
        } else {
            vars.unbound.insert(name.clone());
        }
    }

    Ok(vars)
}
