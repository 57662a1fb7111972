//! Statement data types.

use dre_shared::Metric;
use serde::{Serialize, Serializer};

use crate::snapshot::FinancialSnapshot;

/// Input snapshot plus the first tier of derived figures.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementResult {
    /// The snapshot the figures were derived from, unchanged.
    pub inputs: FinancialSnapshot,
    /// Net income growth over the prior year, in percent.
    pub growth: Metric,
    /// Net income minus cost of goods sold.
    pub gross_result: Metric,
    /// Gross result minus administrative, sales and operational costs.
    pub operational_result: Metric,
    /// Operational result plus depreciation (period EBITDA, `_ebitda`).
    pub ebitda: Metric,
    /// Profit before income tax.
    pub liquid_profit_before_ir: Metric,
    /// Profit after income tax.
    pub liquid_profit: Metric,
    /// Short plus long-term tax liability.
    pub total_tax_liability: Metric,
    /// Liquid debit.
    pub liquid_debit: Metric,
    /// Liquid debit plus tax liability.
    pub liquid_debit_with_liability: Metric,
    /// Working capital variation against the prior year.
    pub k_variation: Metric,
    /// Total additional leverage.
    pub additional_leverage_total: Metric,
    /// Financial debits of the additional leverage.
    pub financial_debits: Metric,
    /// Additional leverage due within twelve months.
    pub additional_leverage_cp: Metric,
    /// Total revenue.
    pub total_revenue: Metric,
    /// Short plus long-term onerous liability.
    pub total_debit: Metric,
}

impl StatementResult {
    /// Derived figures in evaluation order, keyed by output name.
    #[must_use]
    pub fn metrics(&self) -> [(&'static str, Metric); 15] {
        [
            ("growth", self.growth),
            ("gross_result", self.gross_result),
            ("operational_result", self.operational_result),
            ("_ebitda", self.ebitda),
            ("liquid_profit_before_ir", self.liquid_profit_before_ir),
            ("liquid_profit", self.liquid_profit),
            ("total_tax_liability", self.total_tax_liability),
            ("liquid_debit", self.liquid_debit),
            ("liquid_debit_with_liability", self.liquid_debit_with_liability),
            ("k_variation", self.k_variation),
            ("additional_leverage_total", self.additional_leverage_total),
            ("financial_debits", self.financial_debits),
            ("additional_leverage_cp", self.additional_leverage_cp),
            ("total_revenue", self.total_revenue),
            ("total_debit", self.total_debit),
        ]
    }

    /// Returns the inputs with the derived figures merged in.
    ///
    /// Derived keys replace input keys of the same name.
    #[must_use]
    pub fn to_snapshot(&self) -> FinancialSnapshot {
        let mut merged = self.inputs.clone();
        for (key, metric) in self.metrics() {
            merged.insert(key, metric);
        }
        merged
    }
}

/// Serializes as one flat record: inputs plus derived figures.
impl Serialize for StatementResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_snapshot().serialize(serializer)
    }
}
