//! Compiled unit: an encoded, disassemblable instruction body.
//!
//! A [`CompiledUnit`] is either a callable's own body or a nested fragment
//! (comprehension body, lambda body, inner `def` body) embedded in another
//! unit's constant table. The body is stored encoded -- opcodes with raw
//! table indices -- together with the constant and name tables those indices
//! resolve against, and the namespace of the lexical globals context the
//! unit was defined in.
//!
//! Units are immutable once built and are only ever borrowed by the
//! analysis.

use serde::{Deserialize, Serialize};

use crate::id::{NamespaceId, UnitId};
use crate::instr::RawInstr;
use crate::value::Value;

/// An encoded instruction body with its constant and name tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledUnit {
    /// Unique identity for this unit.
    pub id: UnitId,
    /// Display name (`h`, `<listcomp>`, `<lambda>`).
    pub name: String,
    /// The globals context this unit was defined in. Nested units keep the
    /// namespace of their defining scope, not the root callable's.
    pub namespace: NamespaceId,
    /// Encoded instruction stream.
    code: Vec<RawInstr>,
    /// Constant table, indexed by `LoadConst`/`MakeClosure` arguments.
    /// Nested fragments live here as [`Value::Code`].
    consts: Vec<Value>,
    /// Name table, indexed by name-loading and import arguments. Import
    /// entries are full dotted paths.
    names: Vec<String>,
}

impl CompiledUnit {
    pub fn new(
        id: UnitId,
        name: &str,
        namespace: NamespaceId,
        code: Vec<RawInstr>,
        consts: Vec<Value>,
        names: Vec<String>,
    ) -> Self {
        CompiledUnit {
            id,
            name: name.to_string(),
            namespace,
            code,
            consts,
            names,
        }
    }

    /// The encoded instruction stream.
    pub fn code(&self) -> &[RawInstr] {
        &self.code
    }

    /// Constant table entry at `index`, if in range.
    pub fn const_at(&self, index: u32) -> Option<&Value> {
        self.consts.get(index as usize)
    }

    /// Name table entry at `index`, if in range.
    pub fn name_at(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(|s| s.as_str())
    }

    /// The full name table. The closure-variable resolver partitions exactly
    /// this set -- names that only occur inside nested fragments are not
    /// visible here.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::Opcode;

    fn sample_unit() -> CompiledUnit {
        CompiledUnit::new(
            UnitId(0),
            "sample",
            NamespaceId(0),
            vec![
                RawInstr::new(Opcode::LoadConst, 0),
                RawInstr::new(Opcode::LoadGlobal, 0),
                RawInstr::simple(Opcode::CallFunction),
                RawInstr::simple(Opcode::Return),
            ],
            vec![Value::Int(42)],
            vec!["print".to_string()],
        )
    }

    #[test]
    fn table_lookups() {
        let unit = sample_unit();
        assert_eq!(unit.const_at(0), Some(&Value::Int(42)));
        assert!(unit.const_at(1).is_none());
        assert_eq!(unit.name_at(0), Some("print"));
        assert!(unit.name_at(7).is_none());
        assert_eq!(unit.code().len(), 4);
    }

    #[test]
    fn serde_roundtrip() {
        let unit = sample_unit();
        let json = serde_json::to_string(&unit).unwrap();
        let back: CompiledUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, unit.name);
        assert_eq!(back.code(), unit.code());
        assert_eq!(back.names(), unit.names());
    }
}
