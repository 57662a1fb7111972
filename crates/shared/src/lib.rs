//! Shared types and configuration for the DRE calculator.
//!
//! This crate provides the vocabulary used by every other crate:
//! - The catalogue of snapshot fields
//! - The three-way formula outcome (`Metric`)
//! - Calculator options and field defaults, loaded from configuration

pub mod config;
pub mod types;

pub use config::{CalculatorOptions, DreConfig, FieldDefaults};
pub use types::{Field, Metric, UnknownField, serialize_number};
