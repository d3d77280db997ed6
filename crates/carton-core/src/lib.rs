pub mod callable;
pub mod env;
pub mod error;
pub mod id;
pub mod instr;
pub mod module;
pub mod namespace;
pub mod unit;
pub mod value;

// Re-export commonly used types
pub use callable::Callable;
pub use env::Environment;
pub use error::{CoreError, ResolutionError};
pub use id::{CallableId, ModuleId, NamespaceId, UnitId};
pub use instr::{Instr, Opcode, Operand, RawInstr};
pub use module::ModuleDef;
pub use namespace::Namespace;
pub use unit::CompiledUnit;
pub use value::Value;
