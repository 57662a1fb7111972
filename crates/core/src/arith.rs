//! Checked decimal arithmetic over optional operands.
//!
//! `None` stands for a non-numeric operand and propagates. Overflow and
//! division by zero also yield `None`, so no formula can panic.

use rust_decimal::Decimal;

/// Months in a year, used to annualize period figures.
pub(crate) const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

pub(crate) fn add(lhs: Option<Decimal>, rhs: Option<Decimal>) -> Option<Decimal> {
    lhs?.checked_add(rhs?)
}

pub(crate) fn sub(lhs: Option<Decimal>, rhs: Option<Decimal>) -> Option<Decimal> {
    lhs?.checked_sub(rhs?)
}

pub(crate) fn mul(lhs: Option<Decimal>, rhs: Option<Decimal>) -> Option<Decimal> {
    lhs?.checked_mul(rhs?)
}

pub(crate) fn div(lhs: Option<Decimal>, rhs: Option<Decimal>) -> Option<Decimal> {
    lhs?.checked_div(rhs?)
}

pub(crate) fn sum<const N: usize>(values: [Option<Decimal>; N]) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value?))
}

/// `value / months × 12`.
pub(crate) fn annualize(value: Option<Decimal>, months: Option<Decimal>) -> Option<Decimal> {
    mul(div(value, months), Some(MONTHS_PER_YEAR))
}

/// `value × 100`.
pub(crate) fn percent(value: Option<Decimal>) -> Option<Decimal> {
    mul(value, Some(Decimal::ONE_HUNDRED))
}

pub(crate) fn negate(value: Option<Decimal>) -> Option<Decimal> {
    value.map(|v| -v)
}
