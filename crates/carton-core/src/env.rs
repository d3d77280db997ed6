//! The host environment: arena of modules, namespaces, units, and callables.
//!
//! [`Environment`] is the single entry point for constructing and querying
//! an analyzable snapshot of an interactive session. All construction goes
//! through builder methods that validate referenced IDs, so an environment
//! handed to the analysis is internally consistent. Once the analysis starts
//! the environment is only ever borrowed immutably; concurrent independent
//! queries over the same environment need no synchronization.
//!
//! Besides ownership, `Environment` provides the host-runtime primitives the
//! analysis consumes:
//!
//! - [`import_by_dotted_path`](Environment::import_by_dotted_path): resolve a
//!   dotted path component by component, collecting every intermediate
//!   provider. Resolution is read-only and idempotent -- resolving the same
//!   path twice is safe and cheap.
//! - [`owning_provider`](Environment::owning_provider): the provider-name
//!   probe for arbitrary bound values.

use std::collections::HashMap;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::callable::Callable;
use crate::error::{CoreError, ResolutionError};
use crate::id::{CallableId, ModuleId, NamespaceId, UnitId};
use crate::instr::RawInstr;
use crate::module::ModuleDef;
use crate::namespace::Namespace;
use crate::unit::CompiledUnit;
use crate::value::Value;

/// Arena owning every entity of one analyzable session snapshot.
#[derive(Debug, Clone)]
pub struct Environment {
    modules: Vec<ModuleDef>,
    namespaces: Vec<Namespace>,
    units: Vec<CompiledUnit>,
    callables: Vec<Callable>,
    /// Import registry: top-level import name -> module. Keys are the names
    /// the import machinery accepts as a path's first segment.
    importable: IndexMap<String, ModuleId>,
    /// Canonical name -> module, for duplicate detection and lookups.
    module_names: HashMap<String, ModuleId>,
    /// The builtins namespace, created with the environment.
    builtins: NamespaceId,
}

impl Environment {
    /// Creates an empty environment with a fresh builtins namespace.
    pub fn new() -> Self {
        Environment {
            modules: Vec::new(),
            namespaces: vec![Namespace::new()],
            units: Vec::new(),
            callables: Vec::new(),
            importable: IndexMap::new(),
            module_names: HashMap::new(),
            builtins: NamespaceId(0),
        }
    }

    /// The builtins namespace ID.
    pub fn builtins(&self) -> NamespaceId {
        self.builtins
    }

    // -----------------------------------------------------------------------
    // Builder methods
    // -----------------------------------------------------------------------

    /// Creates an empty namespace and returns its ID.
    pub fn add_namespace(&mut self) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        self.namespaces.push(Namespace::new());
        id
    }

    /// Binds `name` to `value` in a namespace.
    pub fn bind(
        &mut self,
        namespace: NamespaceId,
        name: &str,
        value: Value,
    ) -> Result<(), CoreError> {
        let ns = self
            .namespaces
            .get_mut(namespace.0 as usize)
            .ok_or(CoreError::NamespaceNotFound { id: namespace })?;
        ns.bind(name, value);
        Ok(())
    }

    /// Binds `name` in the builtins namespace.
    pub fn bind_builtin(&mut self, name: &str, value: Value) {
        // The builtins namespace is created in `new` and never removed.
        let builtins = self.builtins;
        let _ = self.bind(builtins, name, value);
    }

    /// Registers a module under its canonical dotted name.
    ///
    /// Returns [`CoreError::DuplicateModuleName`] if a module with the same
    /// canonical name already exists.
    pub fn add_module(&mut self, canonical_name: &str) -> Result<ModuleId, CoreError> {
        if self.module_names.contains_key(canonical_name) {
            return Err(CoreError::DuplicateModuleName {
                name: canonical_name.to_string(),
            });
        }

        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(ModuleDef::new(id, canonical_name));
        self.module_names.insert(canonical_name.to_string(), id);
        Ok(id)
    }

    /// Makes a module importable as a path's first segment under `name`.
    ///
    /// The import name is usually the module's canonical top-level name, but
    /// may differ (vendored or renamed distributions).
    pub fn register_importable(
        &mut self,
        name: &str,
        module: ModuleId,
    ) -> Result<(), CoreError> {
        if self.modules.get(module.0 as usize).is_none() {
            return Err(CoreError::ModuleNotFound { id: module });
        }
        self.importable.insert(name.to_string(), module);
        Ok(())
    }

    /// Binds an attribute on a module.
    pub fn set_module_attr(
        &mut self,
        module: ModuleId,
        name: &str,
        value: Value,
    ) -> Result<(), CoreError> {
        let def = self
            .modules
            .get_mut(module.0 as usize)
            .ok_or(CoreError::ModuleNotFound { id: module })?;
        def.set_attr(name, value);
        Ok(())
    }

    /// Creates a compiled unit. The defining namespace must exist.
    pub fn add_unit(
        &mut self,
        name: &str,
        namespace: NamespaceId,
        code: Vec<RawInstr>,
        consts: Vec<Value>,
        names: Vec<String>,
    ) -> Result<UnitId, CoreError> {
        if self.namespaces.get(namespace.0 as usize).is_none() {
            return Err(CoreError::NamespaceNotFound { id: namespace });
        }

        let id = UnitId(self.units.len() as u32);
        self.units
            .push(CompiledUnit::new(id, name, namespace, code, consts, names));
        Ok(id)
    }

    /// Creates a top-level callable over an existing unit and namespace.
    pub fn add_callable(
        &mut self,
        name: &str,
        unit: UnitId,
        globals: NamespaceId,
        module: Option<&str>,
    ) -> Result<CallableId, CoreError> {
        self.check_unit(unit)?;
        self.check_namespace(globals)?;

        let id = CallableId(self.callables.len() as u32);
        self.callables.push(Callable::new(
            id,
            name,
            unit,
            globals,
            module.map(str::to_string),
        ));
        Ok(id)
    }

    /// Creates a closure: a callable with captured enclosing bindings.
    pub fn add_closure(
        &mut self,
        name: &str,
        unit: UnitId,
        globals: NamespaceId,
        enclosing: IndexMap<String, Value>,
        module: Option<&str>,
    ) -> Result<CallableId, CoreError> {
        self.check_unit(unit)?;
        self.check_namespace(globals)?;

        let id = CallableId(self.callables.len() as u32);
        self.callables.push(Callable::closure(
            id,
            name,
            unit,
            globals,
            enclosing,
            module.map(str::to_string),
        ));
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn module(&self, id: ModuleId) -> Result<&ModuleDef, CoreError> {
        self.modules
            .get(id.0 as usize)
            .ok_or(CoreError::ModuleNotFound { id })
    }

    pub fn namespace(&self, id: NamespaceId) -> Result<&Namespace, CoreError> {
        self.namespaces
            .get(id.0 as usize)
            .ok_or(CoreError::NamespaceNotFound { id })
    }

    pub fn unit(&self, id: UnitId) -> Result<&CompiledUnit, CoreError> {
        self.units
            .get(id.0 as usize)
            .ok_or(CoreError::UnitNotFound { id })
    }

    pub fn callable(&self, id: CallableId) -> Result<&Callable, CoreError> {
        self.callables
            .get(id.0 as usize)
            .ok_or(CoreError::CallableNotFound { id })
    }

    /// Looks up a module by canonical dotted name.
    pub fn module_named(&self, canonical_name: &str) -> Option<ModuleId> {
        self.module_names.get(canonical_name).copied()
    }

    // -----------------------------------------------------------------------
    // Host-runtime primitives
    // -----------------------------------------------------------------------

    /// Resolves a dotted import path, collecting every intermediate provider.
    ///
    /// The first segment resolves against the import registry; each further
    /// segment resolves as an attribute of the previous provider that is
    /// itself a module. On failure the error carries the prefix that did
    /// resolve, in path order.
    pub fn import_by_dotted_path(
        &self,
        path: &str,
    ) -> Result<SmallVec<[ModuleId; 4]>, ResolutionError> {
        let mut resolved: SmallVec<[ModuleId; 4]> = SmallVec::new();
        let mut segments = path.split('.');

        let first = segments.next().unwrap_or("");
        let mut current = match self.importable.get(first) {
            Some(&id) => id,
            None => {
                return Err(ResolutionError {
                    path: path.to_string(),
                    segment: first.to_string(),
                    resolved,
                })
            }
        };
        resolved.push(current);

        for segment in segments {
            // A dangling attribute ID counts as a failed segment, not a panic.
            let next = self
                .modules
                .get(current.0 as usize)
                .and_then(|module| module.attr(segment))
                .and_then(|value| match value {
                    Value::Module(next) => Some(*next),
                    _ => None,
                });
            match next {
                Some(next) => {
                    resolved.push(next);
                    current = next;
                }
                None => {
                    return Err(ResolutionError {
                        path: path.to_string(),
                        segment: segment.to_string(),
                        resolved,
                    })
                }
            }
        }

        Ok(resolved)
    }

    /// Provider-name probe: the canonical name of the provider a value
    /// originates from, if it exposes one.
    ///
    /// Modules report their canonical name, callables their owning module
    /// (when known), instances whatever provider they carry. Bare code
    /// fragments and literals expose nothing. The instance path is a
    /// heuristic and may both over- and under-report.
    pub fn owning_provider<'a>(&'a self, value: &'a Value) -> Option<&'a str> {
        match value {
            Value::Module(id) => self.modules.get(id.0 as usize).map(|m| m.name.as_str()),
            Value::Callable(id) => self
                .callables
                .get(id.0 as usize)
                .and_then(|c| c.module.as_deref()),
            Value::Instance { provider } => provider.as_deref(),
            _ => None,
        }
    }

    fn check_unit(&self, id: UnitId) -> Result<(), CoreError> {
        if self.units.get(id.0 as usize).is_none() {
            return Err(CoreError::UnitNotFound { id });
        }
        Ok(())
    }

    fn check_namespace(&self, id: NamespaceId) -> Result<(), CoreError> {
        if self.namespaces.get(id.0 as usize).is_none() {
            return Err(CoreError::NamespaceNotFound { id });
        }
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
