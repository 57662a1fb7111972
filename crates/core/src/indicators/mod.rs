//! Second pass: normalized indicators.
//!
//! Annualized revenues, margins, and leverage, coverage and liquidity ratios
//! computed over a snapshot that already carries the first-tier figures.

pub mod service;
pub mod types;


pub use service::IndicatorCalculator;
pub use types::IndicatorResult;
