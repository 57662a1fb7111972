//! Catalogue of the snapshot fields read by the calculators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a key does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

/// A named field of a financial snapshot.
///
/// Covers the raw accounting inputs and the first-tier figures that the
/// indicator pass reads back from a merged snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // === Income statement ===
    /// Net income of the period.
    NetIncome,
    /// Net income of the same period one year earlier.
    NetIncomeYearBefore,
    /// Cost of goods sold.
    SoldProductCost,
    /// Administrative cost.
    AdmCost,
    /// Sales team cost.
    SellTeamCost,
    /// Other operational cost.
    OpCost,
    /// Depreciation and amortization.
    Depreciation,
    /// Financial result (income minus expense).
    FinancialResult,
    /// Non-recurring revenues and expenses.
    RevExpNoRec,
    /// Other results.
    Other,
    /// Income tax and social contribution expense.
    ExpIrCsll,

    // === Taxes and debt ===
    /// Short-term tax liability.
    TaxesCp,
    /// Long-term tax liability.
    TaxesLp,
    /// Cash availability.
    CashAvailability,
    /// Short-term onerous liability.
    OnerousLiabilityCp,
    /// Long-term onerous liability.
    OnerousLiabilityLp,

    // === Working capital ===
    /// Customer receivables.
    CustomerReceive,
    /// Stock.
    Stock,
    /// Bills payable.
    BillsPay,
    /// Customer receivables one year earlier.
    CustomerReceiveYearBefore,
    /// Stock one year earlier.
    StockYearBefore,
    /// Bills payable one year earlier.
    BillsPayBefore,

    // === Leverage ===
    /// Multiplier applied to the leverage target value.
    LeverageQuotient,
    /// Target value of the additional leverage.
    TargetValue,
    /// CDI rate.
    Cdi,
    /// Term of the additional leverage, in months.
    TargetTerm,

    // === Balance sheet ===
    /// Number of months covered by the period.
    MonthQuantity,
    /// Net worth (liquid assets).
    LiquidAssets,
    /// Current assets.
    CurrentAssets,
    /// Non-current assets.
    NoCurrentAssets,
    /// Short-term liabilities.
    #[serde(alias = "liability_cp")]
    LiabilitiesCp,
    /// Long-term liabilities.
    LiabilitiesLp,
    /// Revenue billed in dollars.
    DollarRevenue,
    /// Gross revenue.
    GrossRevenue,
    /// Overdue receivables reported by Serasa.
    Serasa,
    /// Overdue receivables reported by Refin.
    Refin,

    // === First tier, read back by the indicator pass ===
    /// Gross result.
    GrossResult,
    /// EBITDA of the period (not annualized).
    #[serde(rename = "_ebitda")]
    PeriodEbitda,
    /// Liquid profit.
    LiquidProfit,
    /// Liquid debit.
    LiquidDebit,
    /// Liquid debit plus tax liability.
    LiquidDebitWithLiability,
    /// Total additional leverage.
    AdditionalLeverageTotal,
    /// Financial debits of the additional leverage.
    FinancialDebits,
    /// Working capital variation.
    KVariation,
}

impl Field {
    /// Every field, in catalogue order.
    pub const ALL: [Self; 44] = [
        Self::NetIncome,
        Self::NetIncomeYearBefore,
        Self::SoldProductCost,
        Self::AdmCost,
        Self::SellTeamCost,
        Self::OpCost,
        Self::Depreciation,
        Self::FinancialResult,
        Self::RevExpNoRec,
        Self::Other,
        Self::ExpIrCsll,
        Self::TaxesCp,
        Self::TaxesLp,
        Self::CashAvailability,
        Self::OnerousLiabilityCp,
        Self::OnerousLiabilityLp,
        Self::CustomerReceive,
        Self::Stock,
        Self::BillsPay,
        Self::CustomerReceiveYearBefore,
        Self::StockYearBefore,
        Self::BillsPayBefore,
        Self::LeverageQuotient,
        Self::TargetValue,
        Self::Cdi,
        Self::TargetTerm,
        Self::MonthQuantity,
        Self::LiquidAssets,
        Self::CurrentAssets,
        Self::NoCurrentAssets,
        Self::LiabilitiesCp,
        Self::LiabilitiesLp,
        Self::DollarRevenue,
        Self::GrossRevenue,
        Self::Serasa,
        Self::Refin,
        Self::GrossResult,
        Self::PeriodEbitda,
        Self::LiquidProfit,
        Self::LiquidDebit,
        Self::LiquidDebitWithLiability,
        Self::AdditionalLeverageTotal,
        Self::FinancialDebits,
        Self::KVariation,
    ];

    /// Returns the snapshot key of this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NetIncome => "net_income",
            Self::NetIncomeYearBefore => "net_income_year_before",
            Self::SoldProductCost => "sold_product_cost",
            Self::AdmCost => "adm_cost",
            Self::SellTeamCost => "sell_team_cost",
            Self::OpCost => "op_cost",
            Self::Depreciation => "depreciation",
            Self::FinancialResult => "financial_result",
            Self::RevExpNoRec => "rev_exp_no_rec",
            Self::Other => "other",
            Self::ExpIrCsll => "exp_ir_csll",
            Self::TaxesCp => "taxes_cp",
            Self::TaxesLp => "taxes_lp",
            Self::CashAvailability => "cash_availability",
            Self::OnerousLiabilityCp => "onerous_liability_cp",
            Self::OnerousLiabilityLp => "onerous_liability_lp",
            Self::CustomerReceive => "customer_receive",
            Self::Stock => "stock",
            Self::BillsPay => "bills_pay",
            Self::CustomerReceiveYearBefore => "customer_receive_year_before",
            Self::StockYearBefore => "stock_year_before",
            Self::BillsPayBefore => "bills_pay_before",
            Self::LeverageQuotient => "leverage_quotient",
            Self::TargetValue => "target_value",
            Self::Cdi => "cdi",
            Self::TargetTerm => "target_term",
            Self::MonthQuantity => "month_quantity",
            Self::LiquidAssets => "liquid_assets",
            Self::CurrentAssets => "current_assets",
            Self::NoCurrentAssets => "no_current_assets",
            Self::LiabilitiesCp => "liabilities_cp",
            Self::LiabilitiesLp => "liabilities_lp",
            Self::DollarRevenue => "dollar_revenue",
            Self::GrossRevenue => "gross_revenue",
            Self::Serasa => "serasa",
            Self::Refin => "refin",
            Self::GrossResult => "gross_result",
            Self::PeriodEbitda => "_ebitda",
            Self::LiquidProfit => "liquid_profit",
            Self::LiquidDebit => "liquid_debit",
            Self::LiquidDebitWithLiability => "liquid_debit_with_liability",
            Self::AdditionalLeverageTotal => "additional_leverage_total",
            Self::FinancialDebits => "financial_debits",
            Self::KVariation => "k_variation",
        }
    }

    /// Legacy spellings accepted for this field, checked after [`Field::key`].
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::LiabilitiesCp => &["liability_cp"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s || field.aliases().contains(&s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
