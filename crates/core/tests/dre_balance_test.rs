//! End-to-end tests over JSON snapshots.

use dre_core::{
    CalculatorOptions, DreCalculator, FieldDefaults, FieldValue, FinancialSnapshot, Metric,
    SnapshotError, calculate_dre_balance, parse_snapshots,
};
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::json;

fn snapshot(json: &str) -> FinancialSnapshot {
    FinancialSnapshot::from_json_str(json).unwrap()
}

#[test]
fn test_income_statement_chain_from_json() {
    let input = snapshot(
        r#"{
            "net_income": 1000,
            "sold_product_cost": 600,
            "adm_cost": 100,
            "sell_team_cost": 50,
            "op_cost": 50,
            "depreciation": 20
        }"#,
    );

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.gross_result, Metric::Value(dec!(400)));
    assert_eq!(result.operational_result, Metric::Value(dec!(200)));
    assert_eq!(result.ebitda, Metric::Value(dec!(220)));
    assert_eq!(result.total_revenue, Metric::Value(dec!(400)));
    // No prior-year figure at all.
    assert_eq!(result.growth, Metric::Empty);
}

#[test]
fn test_inputs_pass_through_unchanged() {
    let input = snapshot(
        r#"{
            "company": "ACME",
            "net_income": "1000",
            "sold_product_cost": 600,
            "depreciation": 20.5,
            "tags": ["a", "b"]
        }"#,
    );

    let json = serde_json::to_value(calculate_dre_balance(&input, None)).unwrap();

    assert_eq!(json["company"], json!("ACME"));
    assert_eq!(json["net_income"], json!("1000"));
    assert_eq!(json["sold_product_cost"], json!(600));
    assert!(json["sold_product_cost"].is_i64());
    assert_eq!(json["depreciation"], json!(20.5));
    assert_eq!(json["tags"], json!(["a", "b"]));
    assert_eq!(json["gross_result"], json!(400));
}

#[rstest]
#[case::plain("1000", dec!(400))]
#[case::trailing_text("1000abc", dec!(400))]
#[case::decimal_point("1000.5", dec!(400.5))]
#[case::leading_space("  1000", dec!(400))]
fn test_text_numbers_read_leniently(
    #[case] net_income: &str,
    #[case] expected: rust_decimal::Decimal,
) {
    let input = FinancialSnapshot::new()
        .with("net_income", net_income)
        .with("sold_product_cost", 600);

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.gross_result, Metric::Value(expected));
}

#[test]
fn test_absent_defaulted_field_reads_as_zero() {
    let input = FinancialSnapshot::new()
        .with("net_income", 1000)
        .with("sold_product_cost", 600);

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.operational_result, Metric::Value(dec!(400)));
    assert_eq!(result.ebitda, Metric::Value(dec!(400)));
}

#[test]
fn test_present_non_numeric_field_empties_its_chain() {
    let input = snapshot(r#"{"net_income": 1000, "sold_product_cost": 600, "adm_cost": "n/a"}"#);

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.gross_result, Metric::Value(dec!(400)));
    assert_eq!(result.operational_result, Metric::Empty);
    assert_eq!(result.ebitda, Metric::ZERO);
    assert_eq!(result.liquid_profit, Metric::Empty);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["operational_result"], json!(""));
    assert_eq!(json["_ebitda"], json!(0));
}

#[test]
fn test_absent_required_field_is_empty() {
    let input = FinancialSnapshot::new().with("net_income", 1000);

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.gross_result, Metric::Empty);
    assert_eq!(result.total_revenue, Metric::ZERO);
}

#[test]
fn test_statement_is_idempotent() {
    let input = snapshot(
        r#"{"net_income": 1000, "net_income_year_before": 0, "taxes_cp": "12,5", "cdi": 10}"#,
    );
    let options = CalculatorOptions { decimal: 2 };

    assert_eq!(
        calculate_dre_balance(&input, Some(&options)),
        calculate_dre_balance(&input, Some(&options))
    );
}

#[test]
fn test_sentinels_through_both_tiers() {
    let input = snapshot(
        r#"{
            "net_income": 100,
            "sold_product_cost": 100,
            "month_quantity": 12,
            "liquid_assets": 0,
            "serasa": 5,
            "refin": 5,
            "cash_availability": 50,
            "onerous_liability_cp": 50
        }"#,
    );

    let report = DreCalculator::default().calculate_with_indicators(&input);

    assert_eq!(report.statement.ebitda, Metric::Value(dec!(0)));
    assert_eq!(report.statement.financial_debits, Metric::ZERO);
    assert_eq!(report.indicators.net_debt_by_ebitda, Metric::ONE_HUNDRED);
    assert_eq!(report.indicators.net_debt_by_ebitda_interest, Metric::ONE_HUNDRED);
    assert_eq!(report.indicators.interest_coverage, Metric::ZERO);
    assert_eq!(report.indicators.default_ninetydays_by_equity, Metric::TEN);
}

#[test]
fn test_interest_coverage_capped_without_financial_expense() {
    let input = FinancialSnapshot::new()
        .with("net_income", 200)
        .with("sold_product_cost", 100)
        .with("financial_result", 50)
        .with("month_quantity", 12);

    let report = DreCalculator::default().calculate_with_indicators(&input);

    assert_eq!(report.statement.ebitda, Metric::Value(dec!(100)));
    assert_eq!(report.indicators.interest_coverage, Metric::ONE_HUNDRED);
}

#[rstest]
#[case::absent(None)]
#[case::not_numeric(Some("n/a"))]
fn test_coverage_empty_without_financial_result(#[case] financial_result: Option<&str>) {
    let mut input = FinancialSnapshot::new()
        .with("net_income", 1000)
        .with("sold_product_cost", 600)
        .with("month_quantity", 12)
        .with("cash_availability", 100)
        .with("onerous_liability_cp", 100);
    if let Some(text) = financial_result {
        input.insert("financial_result", text);
    }

    let report = DreCalculator::default().calculate_with_indicators(&input);

    assert_eq!(report.indicators.interest_coverage, Metric::Empty);
    assert_eq!(report.indicators.interest_coverage_minus_working_capital, Metric::Empty);
    assert_eq!(report.indicators.net_debt_by_ebitda_interest, Metric::Empty);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["interest_coverage"], json!(""));
    assert_eq!(json["interest_coveraty_minus_working_capital"], json!(""));
}

#[test]
fn test_absent_financial_result_still_defaults_in_statement() {
    let input = FinancialSnapshot::new()
        .with("net_income", 1000)
        .with("sold_product_cost", 600);

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.liquid_profit_before_ir, Metric::Value(dec!(400)));
}

#[test]
fn test_working_capital_variation_zero_without_balances() {
    let input = snapshot(
        r#"{
            "customer_receive": 0, "stock": 0, "bills_pay": 0,
            "customer_receive_year_before": 0, "stock_year_before": 0, "bills_pay_before": 0
        }"#,
    );

    let result = calculate_dre_balance(&input, None);

    assert_eq!(result.k_variation, Metric::Value(dec!(0)));
}

#[test]
fn test_custom_defaults_stand_in_for_absent_fields() {
    let defaults = FieldDefaults::standard().with(dre_core::Field::Cdi, dec!(2));
    let calculator = DreCalculator::new(CalculatorOptions::default(), defaults);
    let input = FinancialSnapshot::new()
        .with("leverage_quotient", 2)
        .with("target_value", 5);

    let report = calculator.calculate_with_indicators(&input);

    assert_eq!(report.statement.additional_leverage_total, Metric::Value(dec!(10)));
    // -(2 + 8) / 10
    assert_eq!(report.statement.financial_debits, Metric::Value(dec!(-1)));
}

#[test]
fn test_batch_from_json_array_keeps_order() {
    let snapshots = parse_snapshots(
        r#"[
            {"net_income": 10, "sold_product_cost": 1},
            {"net_income": 20, "sold_product_cost": 2},
            {"net_income": 30, "sold_product_cost": 3}
        ]"#,
    )
    .unwrap()
    .into_vec();

    let reports = DreCalculator::default().calculate_batch(&snapshots);
    let gross: Vec<Metric> = reports.iter().map(|r| r.statement.gross_result).collect();

    assert_eq!(
        gross,
        vec![
            Metric::Value(dec!(9)),
            Metric::Value(dec!(18)),
            Metric::Value(dec!(27)),
        ]
    );
    assert_eq!(reports[1].statement.inputs.get("net_income"), Some(&FieldValue::from(20)));
}

#[test]
fn test_batch_rejects_non_object_item() {
    let err = parse_snapshots(r#"[{"net_income": 1}, 42]"#).unwrap_err();

    assert!(matches!(
        err,
        SnapshotError::ItemNotAnObject {
            index: 1,
            found: "number"
        }
    ));
}
