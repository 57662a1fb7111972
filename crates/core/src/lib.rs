//! DRE and balance indicator calculations.
//!
//! This crate contains pure calculation logic with ZERO file, network or
//! database dependencies. Given one period's raw figures it derives the
//! income statement figures and, from those, the normalized indicators.
//!
//! # Modules
//!
//! - `snapshot` - Raw figures keyed by field name, and lenient numeric reading
//! - `statement` - First pass: gross and operational results, EBITDA, debt
//! - `indicators` - Second pass: annualized figures, margins and ratios
//! - `calculator` - Entry points combining both passes

mod arith;
pub mod calculator;
pub mod indicators;
pub mod snapshot;
pub mod statement;

pub use calculator::{DreCalculator, DreReport, calculate_dre_balance};
pub use dre_shared::{CalculatorOptions, DreConfig, Field, FieldDefaults, Metric};
pub use indicators::{IndicatorCalculator, IndicatorResult};
pub use snapshot::{
    FieldValue, FinancialSnapshot, ParsedSnapshots, SnapshotError, parse_snapshots,
};
pub use statement::{StatementCalculator, StatementResult};
