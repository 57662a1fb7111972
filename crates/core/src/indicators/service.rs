//! Second-tier indicator formulas.

use dre_shared::{Field, FieldDefaults, Metric};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::types::IndicatorResult;
use crate::arith::{add, annualize, div, negate, percent, sub, sum};
use crate::snapshot::{FinancialSnapshot, Operands};

/// Calculator for annualized figures, margins and leverage, coverage and
/// liquidity ratios.
///
/// Reads the raw fields plus the first-tier figures, which the caller is
/// expected to have merged into the snapshot.
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// Derives every indicator from `snapshot`.
    ///
    /// Only the [`FieldDefaults::INDICATOR_DEFAULTED`] entries of `defaults`
    /// apply here. An absent `financial_result` leaves the coverage figures
    /// empty rather than reading as zero.
    #[instrument(level = "debug", skip_all, fields(fields = snapshot.len()))]
    pub fn calculate(snapshot: &FinancialSnapshot, defaults: &FieldDefaults) -> IndicatorResult {
        let defaults = defaults.restricted_to(&FieldDefaults::INDICATOR_DEFAULTED);
        let input = Operands::new(snapshot, &defaults);

        let month_quantity = input.get(Field::MonthQuantity);
        let period_ebitda = input.get(Field::PeriodEbitda);
        let liquid_debit = input.get(Field::LiquidDebit);
        let leverage = input.get(Field::AdditionalLeverageTotal);
        let financial_result = input.get(Field::FinancialResult);
        let financial_debits = input.get(Field::FinancialDebits);
        let gross_result = input.get(Field::GrossResult);

        let liquid_revenue = Self::liquid_revenue(input.get(Field::NetIncome), month_quantity);
        let ebitda = Self::ebitda(period_ebitda, month_quantity);
        let net_earnings = Self::net_earnings(input.get(Field::LiquidProfit), month_quantity);

        let result = IndicatorResult {
            annual_gross_revenue: Self::annual_gross_revenue(gross_result, month_quantity),
            liquid_revenue,
            equity: Self::equity(input.get(Field::LiquidAssets)),
            ebitda,
            ebitda_by_net_revenue: Self::ebitda_by_net_revenue(
                ebitda.number(),
                liquid_revenue.number(),
            ),
            net_earnings,
            net_earnings_by_net_revenue: Self::net_earnings_by_net_revenue(
                net_earnings.number(),
                liquid_revenue.number(),
            ),
            net_debt_by_equity: Self::net_debt_by_equity(
                liquid_debit,
                leverage,
                input.get(Field::LiquidAssets),
            ),
            net_debt_by_ebitda: Self::net_debt_by_ebitda(
                liquid_debit,
                leverage,
                period_ebitda,
                month_quantity,
            ),
            net_debt_plus_taxes_by_ebitda: Self::net_debt_plus_taxes_by_ebitda(
                input.get(Field::LiquidDebitWithLiability),
                leverage,
                ebitda.number(),
            ),
            net_debt_by_ebitda_interest: Self::net_debt_by_ebitda_interest(
                liquid_debit,
                leverage,
                financial_result,
                financial_debits,
                period_ebitda,
                month_quantity,
            ),
            gross_debt_by_monthly_revenue: Self::gross_debt_by_monthly_revenue(
                input.get(Field::OnerousLiabilityCp),
                input.get(Field::OnerousLiabilityLp),
                leverage,
                gross_result,
                month_quantity,
            ),
            current_debt_by_monthly_revenue: Self::current_debt_by_monthly_revenue(
                input.get(Field::OnerousLiabilityCp),
                leverage,
                gross_result,
                month_quantity,
            ),
            current_ratio: Self::current_ratio(
                input.get(Field::CurrentAssets),
                input.get(Field::LiabilitiesCp),
            ),
            quick_ratio: Self::quick_ratio(
                input.get(Field::CurrentAssets),
                input.get(Field::Stock),
                input.get(Field::LiabilitiesCp),
            ),
            debt_ratio: Self::debt_ratio(
                input.get(Field::CurrentAssets),
                input.get(Field::NoCurrentAssets),
                input.get(Field::LiabilitiesCp),
                input.get(Field::LiabilitiesLp),
            ),
            interest_coverage: Self::interest_coverage(
                period_ebitda,
                financial_result,
                financial_debits,
            ),
            interest_coverage_minus_working_capital: Self::interest_coverage_minus_working_capital(
                period_ebitda,
                financial_result,
                financial_debits,
                input.get(Field::KVariation),
            ),
            usd_income: Self::usd_income(
                input.get(Field::DollarRevenue),
                input.get(Field::GrossRevenue),
            ),
            default_ninetydays_by_equity: Self::default_ninetydays_by_equity(
                input.get(Field::LiquidAssets),
                input.get(Field::Serasa),
                input.get(Field::Refin),
            ),
        };

        debug!(empty = result.empty_count(), "Indicators derived");

        result
    }

    /// `gross_result / whole months × 12`.
    #[must_use]
    pub fn annual_gross_revenue(
        gross_result: Option<Decimal>,
        month_quantity: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(annualize(gross_result, whole_months(month_quantity)))
    }

    /// `net_income / whole months × 12`.
    #[must_use]
    pub fn liquid_revenue(net_income: Option<Decimal>, month_quantity: Option<Decimal>) -> Metric {
        Metric::from_option(annualize(net_income, whole_months(month_quantity)))
    }

    /// Net worth, passed through.
    #[must_use]
    pub fn equity(liquid_assets: Option<Decimal>) -> Metric {
        Metric::from_option(liquid_assets)
    }

    /// `_ebitda / month_quantity × 12`.
    #[must_use]
    pub fn ebitda(period_ebitda: Option<Decimal>, month_quantity: Option<Decimal>) -> Metric {
        Metric::from_option(annualize(period_ebitda, month_quantity))
    }

    /// `ebitda / liquid_revenue × 100`.
    #[must_use]
    pub fn ebitda_by_net_revenue(ebitda: Option<Decimal>, liquid_revenue: Option<Decimal>) -> Metric {
        Metric::from_option(percent(div(ebitda, liquid_revenue)))
    }

    /// `liquid_profit / whole months × 12`.
    #[must_use]
    pub fn net_earnings(liquid_profit: Option<Decimal>, month_quantity: Option<Decimal>) -> Metric {
        Metric::from_option(annualize(liquid_profit, whole_months(month_quantity)))
    }

    /// `net_earnings / liquid_revenue × 100`.
    #[must_use]
    pub fn net_earnings_by_net_revenue(
        net_earnings: Option<Decimal>,
        liquid_revenue: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(percent(div(net_earnings, liquid_revenue)))
    }

    /// `(liquid_debit + additional_leverage_total) / liquid_assets`.
    #[must_use]
    pub fn net_debt_by_equity(
        liquid_debit: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        liquid_assets: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(div(add(liquid_debit, additional_leverage_total), liquid_assets))
    }

    /// `(liquid_debit + additional_leverage_total) / (_ebitda / whole months × 12)`.
    ///
    /// Sentinel 100 when EBITDA or the month count is not positive.
    #[must_use]
    pub fn net_debt_by_ebitda(
        liquid_debit: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        period_ebitda: Option<Decimal>,
        month_quantity: Option<Decimal>,
    ) -> Metric {
        if is_not_positive(period_ebitda) || is_not_positive(month_quantity) {
            return Metric::ONE_HUNDRED;
        }

        let projection = annualize(period_ebitda, whole_months(month_quantity));
        Metric::from_option(div(add(liquid_debit, additional_leverage_total), projection))
    }

    /// `(liquid_debit_with_liability + additional_leverage_total) / ebitda`,
    /// with `ebitda` already annualized.
    #[must_use]
    pub fn net_debt_plus_taxes_by_ebitda(
        liquid_debit_with_liability: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        ebitda: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(div(
            add(liquid_debit_with_liability, additional_leverage_total),
            ebitda,
        ))
    }

    /// Net debt over annualized `_ebitda + financial_result`, plus financial debits.
    ///
    /// Sentinel 100 when EBITDA, or EBITDA after the financial result, is
    /// not positive.
    #[must_use]
    pub fn net_debt_by_ebitda_interest(
        liquid_debit: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        financial_result: Option<Decimal>,
        financial_debits: Option<Decimal>,
        period_ebitda: Option<Decimal>,
        month_quantity: Option<Decimal>,
    ) -> Metric {
        let ebitda_after_interest = add(period_ebitda, financial_result);
        if is_not_positive(period_ebitda) || is_not_positive(ebitda_after_interest) {
            return Metric::ONE_HUNDRED;
        }

        let divisor = add(annualize(ebitda_after_interest, month_quantity), financial_debits);
        Metric::from_option(div(add(liquid_debit, additional_leverage_total), divisor))
    }

    /// Short and long-term onerous liability plus leverage, over monthly revenue.
    #[must_use]
    pub fn gross_debt_by_monthly_revenue(
        onerous_liability_cp: Option<Decimal>,
        onerous_liability_lp: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        gross_result: Option<Decimal>,
        month_quantity: Option<Decimal>,
    ) -> Metric {
        let debt = sum([onerous_liability_cp, onerous_liability_lp, additional_leverage_total]);
        Metric::from_option(div(debt, div(gross_result, month_quantity)))
    }

    /// Short-term onerous liability plus leverage, over monthly revenue.
    #[must_use]
    pub fn current_debt_by_monthly_revenue(
        onerous_liability_cp: Option<Decimal>,
        additional_leverage_total: Option<Decimal>,
        gross_result: Option<Decimal>,
        month_quantity: Option<Decimal>,
    ) -> Metric {
        let debt = add(onerous_liability_cp, additional_leverage_total);
        Metric::from_option(div(debt, div(gross_result, month_quantity)))
    }

    /// `current_assets / liabilities_cp`.
    #[must_use]
    pub fn current_ratio(current_assets: Option<Decimal>, liabilities_cp: Option<Decimal>) -> Metric {
        Metric::from_option(div(current_assets, liabilities_cp))
    }

    /// `(current_assets − stock) / liabilities_cp`.
    #[must_use]
    pub fn quick_ratio(
        current_assets: Option<Decimal>,
        stock: Option<Decimal>,
        liabilities_cp: Option<Decimal>,
    ) -> Metric {
        Metric::from_option(div(sub(current_assets, stock), liabilities_cp))
    }

    /// `(current_assets + no_current_assets) / (liabilities_cp + liabilities_lp)`.
    ///
    /// Empty unless total liabilities are positive.
    #[must_use]
    pub fn debt_ratio(
        current_assets: Option<Decimal>,
        no_current_assets: Option<Decimal>,
        liabilities_cp: Option<Decimal>,
        liabilities_lp: Option<Decimal>,
    ) -> Metric {
        let liabilities = add(liabilities_cp, liabilities_lp);
        if !liabilities.is_some_and(|total| total > Decimal::ZERO) {
            return Metric::Empty;
        }

        Metric::from_option(div(add(current_assets, no_current_assets), liabilities))
    }

    /// `_ebitda / −(financial_result + financial_debits)`.
    ///
    /// Sentinel 0 when EBITDA is not positive, sentinel 100 when the
    /// financial result is not negative.
    #[must_use]
    pub fn interest_coverage(
        period_ebitda: Option<Decimal>,
        financial_result: Option<Decimal>,
        financial_debits: Option<Decimal>,
    ) -> Metric {
        coverage(
            period_ebitda,
            financial_result,
            negate(add(financial_result, financial_debits)),
        )
    }

    /// `_ebitda / −(financial_result + financial_debits − k_variation)`,
    /// guarded like [`IndicatorCalculator::interest_coverage`].
    #[must_use]
    pub fn interest_coverage_minus_working_capital(
        period_ebitda: Option<Decimal>,
        financial_result: Option<Decimal>,
        financial_debits: Option<Decimal>,
        k_variation: Option<Decimal>,
    ) -> Metric {
        coverage(
            period_ebitda,
            financial_result,
            negate(sub(add(financial_result, financial_debits), k_variation)),
        )
    }

    /// `dollar_revenue / gross_revenue`.
    #[must_use]
    pub fn usd_income(dollar_revenue: Option<Decimal>, gross_revenue: Option<Decimal>) -> Metric {
        Metric::from_option(div(dollar_revenue, gross_revenue))
    }

    /// `(serasa + refin) / liquid_assets`.
    ///
    /// Sentinel 10 when there are overdue receivables and net worth is not
    /// positive.
    #[must_use]
    pub fn default_ninetydays_by_equity(
        liquid_assets: Option<Decimal>,
        serasa: Option<Decimal>,
        refin: Option<Decimal>,
    ) -> Metric {
        let overdue = add(serasa, refin);
        if is_not_positive(liquid_assets) && overdue.is_some_and(|total| total > Decimal::ZERO) {
            return Metric::TEN;
        }

        Metric::from_option(div(overdue, liquid_assets))
    }
}

/// Month count as used by the integer annualizations.
fn whole_months(month_quantity: Option<Decimal>) -> Option<Decimal> {
    month_quantity.map(|months| months.trunc())
}

fn is_not_positive(value: Option<Decimal>) -> bool {
    value.is_some_and(|v| v <= Decimal::ZERO)
}

fn coverage(
    period_ebitda: Option<Decimal>,
    financial_result: Option<Decimal>,
    financial_expense: Option<Decimal>,
) -> Metric {
    if is_not_positive(period_ebitda) {
        return Metric::ZERO;
    }
    if financial_result.is_some_and(|result| result >= Decimal::ZERO) {
        return Metric::ONE_HUNDRED;
    }

    Metric::from_option(div(period_ebitda, financial_expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Some(dec!(100)), Some(dec!(50)), Some(Decimal::ZERO), Metric::ONE_HUNDRED)]
    #[case(Some(dec!(100)), Some(Decimal::ZERO), Some(dec!(-5)), Metric::ONE_HUNDRED)]
    #[case(Some(Decimal::ZERO), Some(dec!(-50)), Some(Decimal::ZERO), Metric::ZERO)]
    #[case(Some(dec!(-10)), Some(dec!(50)), Some(Decimal::ZERO), Metric::ZERO)]
    #[case(Some(dec!(100)), Some(dec!(-40)), Some(dec!(-10)), Metric::Value(dec!(2)))]
    #[case(Some(dec!(100)), Some(dec!(-40)), Some(dec!(40)), Metric::Empty)]
    #[case(None, Some(dec!(-40)), Some(Decimal::ZERO), Metric::Empty)]
    fn test_interest_coverage(
        #[case] ebitda: Option<Decimal>,
        #[case] financial_result: Option<Decimal>,
        #[case] financial_debits: Option<Decimal>,
        #[case] expected: Metric,
    ) {
        assert_eq!(
            IndicatorCalculator::interest_coverage(ebitda, financial_result, financial_debits),
            expected
        );
    }

    #[rstest]
    #[case(Some(dec!(100)), Some(dec!(50)), Some(Decimal::ZERO), Some(dec!(30)), Metric::ONE_HUNDRED)]
    #[case(Some(Decimal::ZERO), Some(dec!(-50)), Some(Decimal::ZERO), Some(dec!(30)), Metric::ZERO)]
    #[case(Some(dec!(100)), Some(dec!(-40)), Some(dec!(-10)), Some(dec!(50)), Metric::Value(dec!(1)))]
    #[case(Some(dec!(100)), Some(dec!(-40)), Some(Decimal::ZERO), Some(dec!(-40)), Metric::Empty)]
    fn test_interest_coverage_minus_working_capital(
        #[case] ebitda: Option<Decimal>,
        #[case] financial_result: Option<Decimal>,
        #[case] financial_debits: Option<Decimal>,
        #[case] k_variation: Option<Decimal>,
        #[case] expected: Metric,
    ) {
        assert_eq!(
            IndicatorCalculator::interest_coverage_minus_working_capital(
                ebitda,
                financial_result,
                financial_debits,
                k_variation,
            ),
            expected
        );
    }

    #[rstest]
    #[case(Some(Decimal::ZERO), Some(dec!(12)))]
    #[case(Some(dec!(-5)), Some(dec!(12)))]
    #[case(Some(dec!(500)), Some(Decimal::ZERO))]
    #[case(Some(dec!(500)), Some(dec!(-1)))]
    fn test_net_debt_by_ebitda_sentinel(
        #[case] ebitda: Option<Decimal>,
        #[case] month_quantity: Option<Decimal>,
    ) {
        assert_eq!(
            IndicatorCalculator::net_debt_by_ebitda(
                Some(dec!(1000)),
                Some(dec!(200)),
                ebitda,
                month_quantity,
            ),
            Metric::ONE_HUNDRED
        );
    }

    #[test]
    fn test_net_debt_by_ebitda() {
        // 6 months of 300 project to 600 a year.
        assert_eq!(
            IndicatorCalculator::net_debt_by_ebitda(
                Some(dec!(1000)),
                Some(dec!(200)),
                Some(dec!(300)),
                Some(dec!(6)),
            ),
            Metric::Value(dec!(2))
        );
    }

    #[test]
    fn test_net_debt_by_ebitda_fractional_month_is_empty() {
        assert_eq!(
            IndicatorCalculator::net_debt_by_ebitda(
                Some(dec!(1000)),
                Some(dec!(200)),
                Some(dec!(300)),
                Some(dec!(0.5)),
            ),
            Metric::Empty
        );
    }

    #[rstest]
    #[case(Some(Decimal::ZERO), Some(dec!(10)))]
    #[case(Some(dec!(100)), Some(dec!(-100)))]
    #[case(Some(dec!(100)), Some(dec!(-150)))]
    fn test_net_debt_by_ebitda_interest_sentinel(
        #[case] ebitda: Option<Decimal>,
        #[case] financial_result: Option<Decimal>,
    ) {
        assert_eq!(
            IndicatorCalculator::net_debt_by_ebitda_interest(
                Some(dec!(1000)),
                Some(Decimal::ZERO),
                financial_result,
                Some(Decimal::ZERO),
                ebitda,
                Some(dec!(12)),
            ),
            Metric::ONE_HUNDRED
        );
    }

    #[test]
    fn test_net_debt_by_ebitda_interest() {
        // (150 - 50) over 6 months is 200 a year; minus 100 of debits leaves 100.
        assert_eq!(
            IndicatorCalculator::net_debt_by_ebitda_interest(
                Some(dec!(400)),
                Some(dec!(100)),
                Some(dec!(-50)),
                Some(dec!(-100)),
                Some(dec!(150)),
                Some(dec!(6)),
            ),
            Metric::Value(dec!(5))
        );
    }

    #[rstest]
    #[case(Some(Decimal::ZERO), Some(dec!(5)), Some(dec!(5)), Metric::TEN)]
    #[case(Some(dec!(-100)), Some(dec!(5)), Some(Decimal::ZERO), Metric::TEN)]
    #[case(Some(dec!(100)), Some(dec!(5)), Some(dec!(5)), Metric::Value(dec!(0.1)))]
    #[case(Some(dec!(-100)), Some(dec!(50)), Some(dec!(-50)), Metric::Value(Decimal::ZERO))]
    #[case(Some(Decimal::ZERO), Some(Decimal::ZERO), Some(Decimal::ZERO), Metric::Empty)]
    #[case(Some(dec!(100)), None, Some(dec!(5)), Metric::Empty)]
    fn test_default_ninetydays_by_equity(
        #[case] liquid_assets: Option<Decimal>,
        #[case] serasa: Option<Decimal>,
        #[case] refin: Option<Decimal>,
        #[case] expected: Metric,
    ) {
        assert_eq!(
            IndicatorCalculator::default_ninetydays_by_equity(liquid_assets, serasa, refin),
            expected
        );
    }

    #[rstest]
    #[case(Some(dec!(60)), Some(dec!(40)), Metric::Value(dec!(2.5)))]
    #[case(Some(dec!(0)), Some(Decimal::ZERO), Metric::Empty)]
    #[case(Some(dec!(-60)), Some(dec!(40)), Metric::Empty)]
    #[case(None, Some(dec!(40)), Metric::Empty)]
    fn test_debt_ratio(
        #[case] liabilities_cp: Option<Decimal>,
        #[case] liabilities_lp: Option<Decimal>,
        #[case] expected: Metric,
    ) {
        assert_eq!(
            IndicatorCalculator::debt_ratio(
                Some(dec!(150)),
                Some(dec!(100)),
                liabilities_cp,
                liabilities_lp,
            ),
            expected
        );
    }

    #[test]
    fn test_annualized_revenues_truncate_months() {
        assert_eq!(
            IndicatorCalculator::annual_gross_revenue(Some(dec!(600)), Some(dec!(6.9))),
            Metric::Value(dec!(1200))
        );
        assert_eq!(
            IndicatorCalculator::liquid_revenue(Some(dec!(1000)), Some(dec!(0.5))),
            Metric::Empty
        );
        assert_eq!(
            IndicatorCalculator::net_earnings(Some(dec!(100)), Some(Decimal::ZERO)),
            Metric::Empty
        );
    }

    #[test]
    fn test_ebitda_uses_fractional_months() {
        assert_eq!(
            IndicatorCalculator::ebitda(Some(dec!(110)), Some(dec!(5.5))),
            Metric::Value(dec!(240))
        );
    }

    #[test]
    fn test_margins() {
        assert_eq!(
            IndicatorCalculator::ebitda_by_net_revenue(Some(dec!(440)), Some(dec!(2000))),
            Metric::Value(dec!(22))
        );
        assert_eq!(
            IndicatorCalculator::net_earnings_by_net_revenue(Some(dec!(400)), Some(Decimal::ZERO)),
            Metric::Empty
        );
    }

    #[test]
    fn test_monthly_revenue_ratios() {
        assert_eq!(
            IndicatorCalculator::gross_debt_by_monthly_revenue(
                Some(dec!(100)),
                Some(dec!(200)),
                Some(dec!(100)),
                Some(dec!(1200)),
                Some(dec!(12)),
            ),
            Metric::Value(dec!(4))
        );
        assert_eq!(
            IndicatorCalculator::current_debt_by_monthly_revenue(
                Some(dec!(100)),
                Some(dec!(100)),
                Some(Decimal::ZERO),
                Some(dec!(12)),
            ),
            Metric::Empty
        );
    }

    #[test]
    fn test_liquidity_ratios() {
        assert_eq!(
            IndicatorCalculator::current_ratio(Some(dec!(300)), Some(dec!(150))),
            Metric::Value(dec!(2))
        );
        assert_eq!(
            IndicatorCalculator::quick_ratio(Some(dec!(300)), Some(dec!(150)), Some(dec!(150))),
            Metric::Value(dec!(1))
        );
        assert_eq!(
            IndicatorCalculator::current_ratio(Some(dec!(300)), Some(Decimal::ZERO)),
            Metric::Empty
        );
    }

    #[test]
    fn test_usd_income_zero_gross_revenue_is_empty() {
        assert_eq!(
            IndicatorCalculator::usd_income(Some(dec!(10)), Some(Decimal::ZERO)),
            Metric::Empty
        );
        assert_eq!(
            IndicatorCalculator::usd_income(Some(dec!(10)), Some(dec!(40))),
            Metric::Value(dec!(0.25))
        );
    }

    #[rstest]
    #[case::absent(None)]
    #[case::not_numeric(Some("n/a"))]
    fn test_coverage_without_financial_result_is_empty(#[case] financial_result: Option<&str>) {
        let mut snapshot = FinancialSnapshot::new()
            .with("_ebitda", 100)
            .with("month_quantity", 12)
            .with("liquid_debit", 200)
            .with("financial_debits", 0)
            .with("k_variation", 0);
        if let Some(text) = financial_result {
            snapshot.insert("financial_result", text);
        }

        let result = IndicatorCalculator::calculate(&snapshot, &FieldDefaults::standard());

        assert_eq!(result.interest_coverage, Metric::Empty);
        assert_eq!(result.interest_coverage_minus_working_capital, Metric::Empty);
        assert_eq!(result.net_debt_by_ebitda_interest, Metric::Empty);
    }

    #[test]
    fn test_absent_stock_still_defaults_for_quick_ratio() {
        let snapshot = FinancialSnapshot::new()
            .with("current_assets", 300)
            .with("liabilities_cp", 150);

        let result = IndicatorCalculator::calculate(&snapshot, &FieldDefaults::standard());

        assert_eq!(result.quick_ratio, Metric::Value(dec!(2)));
    }
}
