//! Field reading with defaults applied.

use dre_shared::{Field, FieldDefaults};
use rust_decimal::Decimal;

use super::types::{FinancialSnapshot, Operand};

/// Reads formula operands from a snapshot.
///
/// An absent field takes its configured default; without one, and for any
/// present value that is not numeric, the operand is `None`.
#[derive(Debug, Clone, Copy)]
pub struct Operands<'a> {
    snapshot: &'a FinancialSnapshot,
    defaults: &'a FieldDefaults,
}

impl<'a> Operands<'a> {
    /// Creates a reader over `snapshot`.
    #[must_use]
    pub const fn new(snapshot: &'a FinancialSnapshot, defaults: &'a FieldDefaults) -> Self {
        Self { snapshot, defaults }
    }

    /// Returns `field` as a number, if it has one.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<Decimal> {
        match self.snapshot.operand(field) {
            Operand::Number(value) => Some(value),
            Operand::Absent => self.defaults.get(field),
            Operand::NotNumeric => None,
        }
    }
}
