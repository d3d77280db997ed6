//! Stable ID newtypes for environment entities.
//!
//! All IDs are distinct newtype wrappers over `u32`, providing type safety
//! so that a `UnitId` cannot be accidentally used where a `CallableId` is
//! expected. ID equality is the identity relation the frontier engine's
//! visited bookkeeping is keyed on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Module (provider) identity within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

/// Namespace identity within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub u32);

/// Compiled unit identity within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Callable identity within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallableId(pub u32);

// Display implementations -- just print the inner value.

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_inner_value() {
        assert_eq!(format!("{}", ModuleId(7)), "7");
        assert_eq!(format!("{}", NamespaceId(0)), "0");
        assert_eq!(format!("{}", UnitId(42)), "42");
        assert_eq!(format!("{}", CallableId(99)), "99");
    }

    #[test]
    fn id_types_are_distinct() {
        // Ensure that different ID types cannot be confused at the type level.
        // This is a compile-time guarantee; we just verify the values are independent.
        let module = ModuleId(1);
        let unit = UnitId(1);
        let callable = CallableId(1);

        assert_eq!(module.0, unit.0);
        assert_eq!(unit.0, callable.0);
    }

    #[test]
    fn serde_roundtrip() {
        let unit = UnitId(42);
        let json = serde_json::to_string(&unit).unwrap();
        let back: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, back);

        let callable = CallableId(7);
        let json = serde_json::to_string(&callable).unwrap();
        let back: CallableId = serde_json::from_str(&json).unwrap();
        assert_eq!(callable, back);
    }
}
