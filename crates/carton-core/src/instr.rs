//! Instruction vocabulary for compiled unit bodies.
//!
//! A unit's body is stored *encoded*: a sequence of [`RawInstr`], each an
//! [`Opcode`] plus a `u32` argument indexing into the unit's constant or name
//! table. The disassembler decodes these into [`Instr`] values whose
//! [`Operand`] carries the resolved payload (a name, a literal, a nested
//! unit, a callable, or a dotted import path).
//!
//! The opcode set is a small closed enum with predicate methods, so that
//! downstream classification stays total and exhaustively testable instead
//! of matching on opcode name strings. Several distinct load opcodes can
//! carry a code-object constant (`LoadConst` for comprehension bodies,
//! `MakeClosure` for closure creation); [`Opcode::is_load`] groups them.

use serde::{Deserialize, Serialize};

use crate::id::{CallableId, UnitId};
use crate::value::Value;

/// Opcodes a compiled unit body can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    /// Push a constant from the unit's constant table.
    LoadConst,
    /// Load a name from the unit's globals namespace (falling back to
    /// builtins at runtime).
    LoadGlobal,
    /// Load a name with namespace-level lookup semantics (module/class
    /// bodies). Resolves through the same globals mapping as `LoadGlobal`.
    LoadName,
    /// Load a name from an enclosing scope's closure cell.
    LoadDeref,
    /// Load an attribute of the value on top of the stack.
    LoadAttr,
    /// Bind a name in the globals namespace.
    StoreGlobal,
    /// Bind a local variable.
    StoreLocal,
    /// Import a module by the dotted path in the name table and push it.
    ImportModule,
    /// Build a closure from a code-object constant plus captured cells.
    MakeClosure,
    /// Call the callable on the stack.
    CallFunction,
    /// Apply a binary operator to the two values on the stack.
    BinaryOp,
    /// Discard the top of the stack.
    Pop,
    /// Unconditional jump to an instruction offset.
    Jump,
    /// Return the top of the stack to the caller.
    Return,
}

impl Opcode {
    /// Returns `true` for every opcode that pushes a loaded payload -- the
    /// group the classifier's direct-operand rule applies to, regardless of
    /// which member carried the payload.
    pub fn is_load(&self) -> bool {
        matches!(
            self,
            Opcode::LoadConst
                | Opcode::LoadGlobal
                | Opcode::LoadName
                | Opcode::LoadDeref
                | Opcode::LoadAttr
                | Opcode::MakeClosure
        )
    }

    /// Returns `true` if this opcode resolves a name through the unit's
    /// globals mapping.
    pub fn loads_global_name(&self) -> bool {
        matches!(self, Opcode::LoadGlobal | Opcode::LoadName)
    }

    /// Returns `true` if this opcode performs a module import.
    pub fn is_import(&self) -> bool {
        matches!(self, Opcode::ImportModule)
    }

    /// Returns `true` if this opcode's argument indexes the name table.
    pub fn uses_name_table(&self) -> bool {
        matches!(
            self,
            Opcode::LoadGlobal
                | Opcode::LoadName
                | Opcode::LoadDeref
                | Opcode::LoadAttr
                | Opcode::StoreGlobal
                | Opcode::ImportModule
        )
    }

    /// Returns `true` if this opcode's argument indexes the constant table.
    pub fn uses_const_table(&self) -> bool {
        matches!(self, Opcode::LoadConst | Opcode::MakeClosure)
    }
}

/// An encoded instruction: opcode plus raw table index / offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstr {
    pub op: Opcode,
    /// Index into the constant or name table, jump offset, or unused (0).
    pub arg: u32,
}

impl RawInstr {
    /// An instruction whose argument indexes a table or encodes an offset.
    pub fn new(op: Opcode, arg: u32) -> Self {
        RawInstr { op, arg }
    }

    /// An instruction with no meaningful argument.
    pub fn simple(op: Opcode) -> Self {
        RawInstr { op, arg: 0 }
    }
}

/// Decoded operand of an [`Instr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// No payload (`Pop`, `Return`, ...).
    None,
    /// A name resolved from the unit's name table.
    Name(String),
    /// A constant that is neither code nor a callable.
    Literal(Value),
    /// A nested compiled fragment carried directly by the instruction.
    Unit(UnitId),
    /// A callable carried directly by the instruction.
    Callable(CallableId),
    /// A dotted import path (`a.b.c`).
    DottedPath(String),
}

/// A decoded instruction as produced by the disassembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instr {
    pub op: Opcode,
    pub operand: Operand,
}

impl Instr {
    pub fn new(op: Opcode, operand: Operand) -> Self {
        Instr { op, operand }
    }
}
