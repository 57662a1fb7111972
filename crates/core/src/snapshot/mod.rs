//! Financial snapshot: one period's raw figures keyed by field name.

pub mod error;
pub mod operands;
pub mod parse;
pub mod types;

pub use error::SnapshotError;
pub use operands::Operands;
pub use parse::parse_float;
pub use types::{FieldValue, FinancialSnapshot, Operand, ParsedSnapshots, parse_snapshots};
