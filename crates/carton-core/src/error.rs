//! Core error types for carton-core.
//!
//! Uses `thiserror` for structured, matchable error variants. `CoreError`
//! covers arena lookups and registration conflicts; `ResolutionError` is the
//! one recoverable failure in the environment: a dotted import path that
//! stops resolving partway. It carries the provider prefix that did resolve,
//! so callers can keep the partial result instead of discarding it.

use smallvec::SmallVec;
use thiserror::Error;

use crate::id::{CallableId, ModuleId, NamespaceId, UnitId};

/// Core errors produced by the carton-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempting to register a module whose canonical name already exists.
    #[error("duplicate module name: '{name}'")]
    DuplicateModuleName { name: String },

    /// A module ID was not found in the environment.
    #[error("module not found: ModuleId({id})", id = id.0)]
    ModuleNotFound { id: ModuleId },

    /// A namespace ID was not found in the environment.
    #[error("namespace not found: NamespaceId({id})", id = id.0)]
    NamespaceNotFound { id: NamespaceId },

    /// A compiled unit ID was not found in the environment.
    #[error("compiled unit not found: UnitId({id})", id = id.0)]
    UnitNotFound { id: UnitId },

    /// A callable ID was not found in the environment.
    #[error("callable not found: CallableId({id})", id = id.0)]
    CallableNotFound { id: CallableId },
}

/// A dotted import path stopped resolving at some segment.
///
/// `resolved` holds the providers reached before the failing segment, in
/// path order. Treating the path as contributing only this prefix is the
/// expected recovery.
#[derive(Debug, Clone, Error)]
#[error("cannot resolve segment '{segment}' of import path '{path}'")]
pub struct ResolutionError {
    /// The full dotted path as it appeared in the import.
    pub path: String,
    /// The first segment that failed to resolve.
    pub segment: String,
    /// Providers reached before the failure, in path order.
    pub resolved: SmallVec<[ModuleId; 4]>,
}
