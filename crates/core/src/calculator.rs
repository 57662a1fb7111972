//! Entry points running the statement and indicator passes.

use dre_shared::{CalculatorOptions, DreConfig, FieldDefaults};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use tracing::{debug, info, instrument};

use crate::indicators::{IndicatorCalculator, IndicatorResult};
use crate::snapshot::FinancialSnapshot;
use crate::statement::{StatementCalculator, StatementResult};

/// Derives the first-tier statement figures for one snapshot.
///
/// Uses the standard field defaults. Options default to `decimal: 0` when
/// omitted. The returned record holds the inputs plus the first tier only;
/// see [`DreCalculator::calculate_with_indicators`] for both tiers.
#[must_use]
pub fn calculate_dre_balance(
    snapshot: &FinancialSnapshot,
    options: Option<&CalculatorOptions>,
) -> StatementResult {
    DreCalculator::new(options.copied().unwrap_or_default(), FieldDefaults::standard())
        .statement(snapshot)
}

/// Both tiers for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DreReport {
    /// Inputs and first-tier figures.
    pub statement: StatementResult,
    /// Second-tier indicators.
    pub indicators: IndicatorResult,
}

impl DreReport {
    /// Returns one flat record: inputs, first tier, then indicators.
    #[must_use]
    pub fn to_snapshot(&self) -> FinancialSnapshot {
        let mut merged = self.statement.to_snapshot();
        for (key, metric) in self.indicators.metrics() {
            merged.insert(key, metric);
        }
        merged
    }
}

impl Serialize for DreReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_snapshot().serialize(serializer)
    }
}

/// Calculator configured with options and field defaults.
#[derive(Debug, Clone, Default)]
pub struct DreCalculator {
    options: CalculatorOptions,
    defaults: FieldDefaults,
}

impl DreCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new(options: CalculatorOptions, defaults: FieldDefaults) -> Self {
        Self { options, defaults }
    }

    /// Creates a calculator from loaded configuration.
    #[must_use]
    pub fn from_config(config: &DreConfig) -> Self {
        Self::new(config.calculator, config.field_defaults())
    }

    /// The calculator options.
    #[must_use]
    pub const fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// The field defaults.
    #[must_use]
    pub const fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    /// Derives the first-tier figures.
    ///
    /// The indicator pass also runs, over the raw inputs, but its result is
    /// not part of the returned record. Whether callers should receive it
    /// merged is an open product decision.
    #[instrument(level = "debug", skip_all, fields(decimal = self.options.decimal))]
    pub fn statement(&self, snapshot: &FinancialSnapshot) -> StatementResult {
        let statement = StatementCalculator::calculate(snapshot, &self.defaults);

        let unmerged = IndicatorCalculator::calculate(snapshot, &self.defaults);
        debug!(
            empty = unmerged.empty_count(),
            "Indicator pass over raw inputs not merged"
        );

        statement
    }

    /// Derives the indicators of a snapshot that already carries the first tier.
    pub fn indicators(&self, snapshot: &FinancialSnapshot) -> IndicatorResult {
        IndicatorCalculator::calculate(snapshot, &self.defaults)
    }

    /// Runs the statement pass, merges its figures into the snapshot and
    /// runs the indicator pass over the merged record.
    #[instrument(level = "debug", skip_all, fields(decimal = self.options.decimal))]
    pub fn calculate_with_indicators(&self, snapshot: &FinancialSnapshot) -> DreReport {
        let statement = StatementCalculator::calculate(snapshot, &self.defaults);
        let indicators = IndicatorCalculator::calculate(&statement.to_snapshot(), &self.defaults);

        DreReport {
            statement,
            indicators,
        }
    }

    /// Evaluates many snapshots in parallel, keeping input order.
    pub fn calculate_batch(&self, snapshots: &[FinancialSnapshot]) -> Vec<DreReport> {
        info!(count = snapshots.len(), "Evaluating snapshot batch");
        snapshots
            .par_iter()
            .map(|snapshot| self.calculate_with_indicators(snapshot))
            .collect()
    }
}
