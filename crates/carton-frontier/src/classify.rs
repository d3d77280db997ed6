//! Interesting-instruction classifier.
//!
//! Decides whether one decoded instruction denotes a module import, a
//! reference to a nested compiled unit, or a reference to a named global,
//! and extracts the payload. A small closed set of tagged variants keeps the
//! classification total; most instructions classify to nothing.
//!
//! The namespace argument is the *unit's own* globals context, not
//! necessarily the root callable's -- nested units may have been defined
//! under a different lexical globals mapping, and a name must be resolved
//! where the instruction lives.

use carton_core::id::{CallableId, ModuleId, UnitId};
use carton_core::instr::{Instr, Operand};
use carton_core::namespace::Namespace;
use carton_core::value::Value;

/// What an interesting instruction denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A module import by dotted path. Resolution (and the collection of
    /// every intermediate provider) happens in the engine.
    Import { path: String },
    /// A nested compiled fragment: carried directly by a load instruction,
    /// or a bare code value bound to a global name.
    NestedUnit(UnitId),
    /// A callable carried directly by a load instruction.
    NestedCallable(CallableId),
    /// A global name bound to a module.
    GlobalModule(ModuleId),
    /// A global name bound to a callable. The *value* is captured, not the
    /// name -- imports local to an enclosing function, once bound, surface
    /// here even though no instruction ever names their module.
    GlobalCode(CallableId),
}

/// Classifies one decoded instruction against the namespace it executes in.
///
/// Policy:
/// 1. An import instruction yields [`Classification::Import`] with its
///    dotted path.
/// 2. Any load-type instruction whose operand *directly* carries a compiled
///    unit or callable yields `NestedUnit`/`NestedCallable`, regardless of
///    which load opcode carried it.
/// 3. A global-name-load resolves the name in `globals`: a bound module,
///    callable, or bare code unit is interesting; any other binding -- or no
///    binding at all -- is not.
/// 4. Everything else yields `None`.
pub fn classify(instr: &Instr, globals: &Namespace) -> Option<Classification> {
    if instr.op.is_import() {
        if let Operand::DottedPath(path) = &instr.operand {
            return Some(Classification::Import { path: path.clone() });
        }
        return None;
    }

    if !instr.op.is_load() {
        return None;
    }

    match &instr.operand {
        Operand::Unit(unit) => Some(Classification::NestedUnit(*unit)),
        Operand::Callable(callable) => Some(Classification::NestedCallable(*callable)),
        Operand::Name(name) if instr.op.loads_global_name() => {
            match globals.get(name) {
                Some(Value::Module(module)) => Some(Classification::GlobalModule(*module)),
                Some(Value::Callable(callable)) => {
                    Some(Classification::GlobalCode(*callable))
                }
                Some(Value::Code(unit)) => Some(Classification::NestedUnit(*unit)),
                _ => None,
            }
        }
        _ => None,
    }
}
