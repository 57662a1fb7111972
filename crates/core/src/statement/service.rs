//! First-tier statement formulas.

use dre_shared::{Field, FieldDefaults, Metric};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::types::StatementResult;
use crate::arith::{MONTHS_PER_YEAR, add, div, mul, negate, percent, sub, sum};
use crate::snapshot::{FinancialSnapshot, Operands};

/// Spread added to the CDI rate when pricing additional leverage.
const CDI_SPREAD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Calculator for the income statement and debt figures.
///
/// Formulas take `None` for a non-numeric operand and never fail: each one
/// yields a value, a sentinel, or the empty placeholder.
pub struct StatementCalculator;

impl StatementCalculator {
    /// Derives every first-tier figure from `snapshot`, in dependency order.
    #[instrument(level = "debug", skip_all, fields(fields = snapshot.len()))]
    pub fn calculate(snapshot: &FinancialSnapshot, defaults: &FieldDefaults) -> StatementResult {
        let input = Operands::new(snapshot, defaults);

        let growth = Self::growth(input.get(Field::NetIncome), input.get(Field::NetIncomeYearBefore));
        let gross_result =
            Self::gross_result(input.get(Field::NetIncome), input.get(Field::SoldProductCost));
        let operational_result = Self::operational_result(
            gross_result.number(),
            input.get(Field::AdmCost),
            input.get(Field::SellTeamCost),
            input.get(Field::OpCost),
        );
        let ebitda = Self::ebitda(operational_result.number(), input.get(Field::Depreciation));
        let liquid_profit_before_ir = Self::liquid_profit_before_ir(
            operational_result.number(),
            input.get(Field::FinancialResult),
            input.get(Field::RevExpNoRec),
            input.get(Field::Other),
        );
        let liquid_profit =
            Self::liquid_profit(liquid_profit_before_ir.number(), input.get(Field::ExpIrCsll));
        let total_tax_liability =
            Self::total_tax_liability(input.get(Field::TaxesCp), input.get(Field::TaxesLp));
        let liquid_debit = Self::liquid_debit(
            input.get(Field::CashAvailability),
            input.get(Field::OnerousLiabilityCp),
        );
        let liquid_debit_with_liability =
            Self::liquid_debit_with_liability(liquid_debit.number(), total_tax_liability.number());
        let k_variation = Self::k_variation(
            [
                input.get(Field::CustomerReceive),
                input.get(Field::Stock),
                input.get(Field::BillsPay),
            ],
            [
                input.get(Field::CustomerReceiveYearBefore),
                input.get(Field::StockYearBefore),
                input.get(Field::BillsPayBefore),
            ],
        );
        let additional_leverage_total = Self::additional_leverage_total(
            input.get(Field::LeverageQuotient),
            input.get(Field::TargetValue),
        );
        let financial_debits =
            Self::financial_debits(additional_leverage_total.number(), input.get(Field::Cdi));
        let additional_leverage_cp = Self::additional_leverage_cp(
            additional_leverage_total.number(),
            input.get(Field::TargetTerm),
        );
        let total_revenue = Self::total_revenue(gross_result);
        let total_debit = Self::total_debit(
            input.get(Field::OnerousLiabilityCp),
            input.get(Field::OnerousLiabilityLp),
        );

        let result = StatementResult {
            inputs: snapshot.clone(),
            growth,
            gross_result,
            operational_result,
            ebitda,
            liquid_profit_before_ir,
            liquid_profit,
            total_tax_liability,
            liquid_debit,
            liquid_debit_with_liability,
            k_variation,
            additional_leverage_total,
            financial_debits,
            additional_leverage_cp,
            total_revenue,
            total_debit,
        };

        let metrics = result.metrics();
        debug!(
            empty = metrics.iter().filter(|(_, m)| m.is_empty()).count(),
            sentinels = metrics.iter().filter(|(_, m)| m.is_sentinel()).count(),
            "Statement figures derived"
        );

        result
    }

    /// `(net_income − net_income_year_before) / net_income_year_before × 100`.
    ///
    /// Empty when the prior-year figure is zero.
    #[must_use]
    pub fn growth(net_income: Option<Decimal>, net_income_year_before: Option<Decimal>) -> Metric {
        if net_income_year_before.is_some_and(|prior| prior.is_zero()) {
            return Metric::Empty;
        }

        Metric::from_option(percent(div(
            sub(net_income, net_income_year_before),
            net_income_year_before,
        )))
    }

    /// `net_income − sold_product_cost`.
    #[must_use]
    pub fn gross_result(net_income: Option<Decimal>, sold_product_cost: Option<Decimal>) -> Metric {
        Metric::from_option(sub(net_income, sold_product_cost))
    }

    /// `gross_result − adm_cost − sell_team_cost − op_cost`.
    #[must_use]
    pub fn operational_result(
        gross_result: Option<Decimal>,
        adm_cost: Option<Decimal>,
        sell_team_cost: Option<Decimal>,
        op_cost: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(sub(sub(sub(gross_result, adm_cost), sell_team_cost), op_cost))
    }

    /// `operational_result + depreciation`, sentinel 0 when not computable.
    #[must_use]
    pub fn ebitda(operational_result: Option<Decimal>, depreciation: Option<Decimal>) -> Metric {
        add(operational_result, depreciation).map_or(Metric::ZERO, Metric::Value)
    }

    /// `operational_result + financial_result + rev_exp_no_rec + other`.
    #[must_use]
    pub fn liquid_profit_before_ir(
        operational_result: Option<Decimal>,
        financial_result: Option<Decimal>,
        rev_exp_no_rec: Option<Decimal>,
        other: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(sum([operational_result, financial_result, rev_exp_no_rec, other]))
    }

    /// `liquid_profit_before_ir − exp_ir_csll`.
    #[must_use]
    pub fn liquid_profit(
        liquid_profit_before_ir: Option<Decimal>,
        exp_ir_csll: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(sub(liquid_profit_before_ir, exp_ir_csll))
    }

    /// `taxes_cp + taxes_lp`.
    #[must_use]
    pub fn total_tax_liability(taxes_cp: Option<Decimal>, taxes_lp: Option<Decimal>) -> Metric {
        Metric::from_option(add(taxes_cp, taxes_lp))
    }

    /// `cash_availability + onerous_liability_cp`.
    ///
    /// Long-term onerous liability and any liquid-debit adjustment are not
    /// part of the sum. Pending confirmation from the product owner.
    #[must_use]
    pub fn liquid_debit(
        cash_availability: Option<Decimal>,
        onerous_liability_cp: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(add(cash_availability, onerous_liability_cp))
    }

    /// `liquid_debit + total_tax_liability`.
    #[must_use]
    pub fn liquid_debit_with_liability(
        liquid_debit: Option<Decimal>,
        total_tax_liability: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(add(liquid_debit, total_tax_liability))
    }

    /// Working capital of the period minus working capital of the prior year.
    ///
    /// Each side is `[receivables, stock, payables]`, with negative entries
    /// clamped to zero: `max(r, 0) + max(s, 0) − max(p, 0)`.
    #[must_use]
    pub fn k_variation(current: [Option<Decimal>; 3], year_before: [Option<Decimal>; 3]) -> Metric {
        Metric::from_option(sub(working_capital(current), working_capital(year_before)))
    }

    /// `leverage_quotient × target_value`, sentinel 0 when not computable.
    #[must_use]
    pub fn additional_leverage_total(
        leverage_quotient: Option<Decimal>,
        target_value: Option<Decimal>,
    ) -> Metric {
        mul(leverage_quotient, target_value).map_or(Metric::ZERO, Metric::Value)
    }

    /// `−(cdi + 8) / additional_leverage_total`, sentinel 0 without leverage.
    #[must_use]
    pub fn financial_debits(
        additional_leverage_total: Option<Decimal>,
        cdi: Option<Decimal>,
    ) -> Metric {
        if additional_leverage_total.is_some_and(|total| total.is_zero()) {
            return Metric::ZERO;
        }

        Metric::from_option(negate(div(add(cdi, Some(CDI_SPREAD)), additional_leverage_total)))
    }

    /// `additional_leverage_total × 12 / target_term`, sentinel 0 for a zero term.
    #[must_use]
    pub fn additional_leverage_cp(
        additional_leverage_total: Option<Decimal>,
        target_term: Option<Decimal>,
    ) -> Metric {
        if target_term.is_some_and(|term| term.is_zero()) {
            return Metric::ZERO;
        }

        Metric::from_option(div(
            mul(additional_leverage_total, Some(MONTHS_PER_YEAR)),
            target_term,
        ))
    }

    /// The gross result, sentinel 0 when it is empty.
    #[must_use]
    pub fn total_revenue(gross_result: Metric) -> Metric {
        gross_result.number().map_or(Metric::ZERO, Metric::Value)
    }

    /// `onerous_liability_cp + onerous_liability_lp`, sentinel 0 when not computable.
    #[must_use]
    pub fn total_debit(
        onerous_liability_cp: Option<Decimal>,
        onerous_liability_lp: Option<Decimal>,
    ) -> Metric {
        add(onerous_liability_cp, onerous_liability_lp).map_or(Metric::ZERO, Metric::Value)
    }
}

fn working_capital([receivables, stock, payables]: [Option<Decimal>; 3]) -> Option<Decimal> {
    let clamp = |value: Option<Decimal>| value.map(|v| v.max(Decimal::ZERO));
    sub(add(clamp(receivables), clamp(stock)), clamp(payables))
}
