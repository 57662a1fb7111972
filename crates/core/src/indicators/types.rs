//! Indicator data types.

use dre_shared::Metric;
use serde::Serialize;

/// Second tier of normalized indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndicatorResult {
    /// Gross result annualized over the period's months.
    #[serde(rename = "anual_gross_revenue")]
    pub annual_gross_revenue: Metric,
    /// Net income annualized.
    pub liquid_revenue: Metric,
    /// Net worth.
    pub equity: Metric,
    /// EBITDA annualized.
    pub ebitda: Metric,
    /// EBITDA margin over annualized net income, in percent.
    pub ebitda_by_net_revenue: Metric,
    /// Liquid profit annualized.
    pub net_earnings: Metric,
    /// Net margin over annualized net income, in percent.
    pub net_earnings_by_net_revenue: Metric,
    /// Net debt over net worth.
    pub net_debt_by_equity: Metric,
    /// Net debt over annualized EBITDA.
    pub net_debt_by_ebitda: Metric,
    /// Net debt plus taxes over annualized EBITDA.
    pub net_debt_plus_taxes_by_ebitda: Metric,
    /// Net debt over annualized EBITDA after financial result and debits.
    pub net_debt_by_ebitda_interest: Metric,
    /// Gross debt over monthly revenue.
    pub gross_debt_by_monthly_revenue: Metric,
    /// Short-term debt over monthly revenue.
    pub current_debt_by_monthly_revenue: Metric,
    /// Current assets over short-term liabilities.
    pub current_ratio: Metric,
    /// Current assets without stock over short-term liabilities.
    pub quick_ratio: Metric,
    /// Total assets over total liabilities.
    pub debt_ratio: Metric,
    /// EBITDA over financial expense.
    pub interest_coverage: Metric,
    /// EBITDA over financial expense net of working capital variation.
    #[serde(rename = "interest_coveraty_minus_working_capital")]
    pub interest_coverage_minus_working_capital: Metric,
    /// Share of revenue billed in dollars.
    pub usd_income: Metric,
    /// Overdue receivables over net worth.
    pub default_ninetydays_by_equity: Metric,
}

impl IndicatorResult {
    /// Indicators in evaluation order, keyed by output name.
    #[must_use]
    pub fn metrics(&self) -> [(&'static str, Metric); 20] {
        [
            ("anual_gross_revenue", self.annual_gross_revenue),
            ("liquid_revenue", self.liquid_revenue),
            ("equity", self.equity),
            ("ebitda", self.ebitda),
            ("ebitda_by_net_revenue", self.ebitda_by_net_revenue),
            ("net_earnings", self.net_earnings),
            ("net_earnings_by_net_revenue", self.net_earnings_by_net_revenue),
            ("net_debt_by_equity", self.net_debt_by_equity),
            ("net_debt_by_ebitda", self.net_debt_by_ebitda),
            ("net_debt_plus_taxes_by_ebitda", self.net_debt_plus_taxes_by_ebitda),
            ("net_debt_by_ebitda_interest", self.net_debt_by_ebitda_interest),
            ("gross_debt_by_monthly_revenue", self.gross_debt_by_monthly_revenue),
            ("current_debt_by_monthly_revenue", self.current_debt_by_monthly_revenue),
            ("current_ratio", self.current_ratio),
            ("quick_ratio", self.quick_ratio),
            ("debt_ratio", self.debt_ratio),
            ("interest_coverage", self.interest_coverage),
            (
                "interest_coveraty_minus_working_capital",
                self.interest_coverage_minus_working_capital,
            ),
            ("usd_income", self.usd_income),
            ("default_ninetydays_by_equity", self.default_ninetydays_by_equity),
        ]
    }

    /// Number of indicators left empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.metrics().iter().filter(|(_, m)| m.is_empty()).count()
    }
}
