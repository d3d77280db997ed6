//! Module-frontier analysis for extracted callables.
//!
//! Given a callable extracted from an interactive environment, compute the
//! set of externally defined modules it may need at runtime to execute
//! elsewhere. The analysis is a best-effort estimate, not a proof: it walks
//! the callable's captured bindings, scans its compiled body (and every
//! nested fragment embedded as a constant), and resolves dotted import
//! paths, while guaranteeing termination over cyclic call graphs.
//!
//! Four components, each a leaf consumed by the one above it:
//!
//! - [`closure`]: partitions a callable's referenced names into
//!   enclosing/globals/builtins/unbound bindings.
//! - [`disasm`]: decodes a compiled unit's instruction stream.
//! - [`classify`]: decides whether one decoded instruction denotes an
//!   import, a nested code unit, or a reference to a named global.
//! - [`frontier`]: the two-level worklist engine tying them together.
//!
//! The primary entry point is [`compute_module_frontier`].

pub mod classify;
pub mod closure;
pub mod disasm;
pub mod error;
pub mod frontier;
pub mod trace;

pub use classify::{classify, Classification};
pub use closure::{resolve_closure_vars, ClosureVars};
pub use disasm::disassemble;
pub use error::{DecodeError, FrontierError};
pub use frontier::{compute_module_frontier, FrontierConfig, FrontierEngine};
pub use trace::{TraceEntry, TraceSource};
