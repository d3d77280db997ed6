//! Code unit disassembler.
//!
//! Decodes a unit's raw instruction stream into [`Instr`] values by
//! resolving each raw argument against the unit's constant or name table.
//! Every call reproduces the sequence from scratch -- there is no cached
//! stream, and re-disassembling the same unit yields the same result.

use carton_core::instr::{Instr, Operand, RawInstr};
use carton_core::unit::CompiledUnit;
use carton_core::value::Value;

use crate::error::DecodeError;

/// Decodes a compiled unit into its ordered instruction sequence.
///
/// Fails with [`DecodeError`] only if a raw argument indexes outside the
/// unit's tables, which cannot happen for units built through the
/// environment's own compiler front ends.
pub fn disassemble(unit: &CompiledUnit) -> Result<Vec<Instr>, DecodeError> {
    unit.code()
        .iter()
        .enumerate()
        .map(|(at, raw)| decode(unit, at, raw))
        .collect()
}

fn decode(unit: &CompiledUnit, at: usize, raw: &RawInstr) -> Result<Instr, DecodeError> {
    let operand = if raw.op.uses_name_table() {
        let name = unit.name_at(raw.arg).ok_or(DecodeError::BadNameIndex {
            unit: unit.id,
            at,
            index: raw.arg,
        })?;
        if raw.op.is_import() {
            Operand::DottedPath(name.to_string())
        } else {
            Operand::Name(name.to_string())
        }
    } else if raw.op.uses_const_table() {
        let value = unit.const_at(raw.arg).ok_or(DecodeError::BadConstIndex {
            unit: unit.id,
            at,
            index: raw.arg,
        })?;
        match value {
            Value::Code(nested) => Operand::Unit(*nested),
            Value::Callable(callable) => Operand::Callable(*callable),
            other => Operand::Literal(other.clone()),
        }
    } else {
        Operand::None
    };

    Ok(Instr::new(raw.op, operand))
}
