//! Common types used across the workspace.

pub mod field;
pub mod metric;
pub mod number;

pub use field::{Field, UnknownField};
pub use metric::Metric;
pub use number::serialize_number;
