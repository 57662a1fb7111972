//! First pass: income statement and debt figures.
//!
//! Derives growth, gross and operational results, EBITDA, liquid profit,
//! tax and debt totals, working capital variation and the additional
//! leverage figures from the raw snapshot.

pub mod service;
pub mod types;


pub use service::StatementCalculator;
pub use types::StatementResult;
