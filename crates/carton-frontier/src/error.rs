//! Error taxonomy for the frontier analysis.
//!
//! Only two failures are hard: a compiled unit that cannot be decoded, and a
//! dangling ID handed in from outside. Import-path resolution failure is
//! *not* here -- it is absorbed by the engine, which keeps whatever provider
//! prefix resolved (see `carton_core::ResolutionError`).

use serde::{Deserialize, Serialize};

use carton_core::error::CoreError;
use carton_core::id::UnitId;

/// A compiled unit is not a valid instruction body.
///
/// Not retried; a query that hits this fails as a whole. Should not occur
/// for units obtained internally.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum DecodeError {
    #[error("constant index {index} out of range at instruction {at} in unit {unit}")]
    BadConstIndex { unit: UnitId, at: usize, index: u32 },

    #[error("name index {index} out of range at instruction {at} in unit {unit}")]
    BadNameIndex { unit: UnitId, at: usize, index: u32 },
}

/// Errors surfaced by a frontier query.
#[derive(Debug, thiserror::Error)]
pub enum FrontierError {
    /// A compiled unit reached by the traversal failed to decode.
    #[error("failed to decode a compiled unit: {0}")]
    Decode(#[from] DecodeError),

    /// The environment rejected a lookup (unknown root callable, dangling
    /// unit or namespace reference).
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_messages_name_the_unit_and_offset() {
        let err = DecodeError::BadConstIndex {
            unit: UnitId(3),
            at: 7,
            index: 12,
        };
        assert_eq!(
            err.to_string(),
            "constant index 12 out of range at instruction 7 in unit 3"
        );
    }

    #[test]
    fn serde_roundtrip_decode_error() {
        let err = DecodeError::BadNameIndex {
            unit: UnitId(1),
            at: 0,
            index: 5,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: DecodeError = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            DecodeError::BadNameIndex { at: 0, index: 5, .. }
        ));
    }

    #[test]
    fn frontier_error_wraps_both_sources() {
        let decode: FrontierError = DecodeError::BadConstIndex {
            unit: UnitId(0),
            at: 0,
            index: 0,
        }
        .into();
        assert!(matches!(decode, FrontierError::Decode(_)));

        let core: FrontierError = CoreError::UnitNotFound { id: UnitId(9) }.into();
        assert!(matches!(core, FrontierError::Core(_)));
    }
}
