use loan_amortization_core::amortization::{calculate_loan_summary, LoanParams};
use loan_amortization_core::comparison::{
    calculate_loan_options, compare_loans, ComparisonInput, LoanField,
};
use loan_amortization_core::LoanError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn base() -> LoanParams {
    LoanParams::new(dec!(300000), dec!(4.5), 30).with_down_payment(dec!(60000))
}

#[test]
fn test_term_sweep_trades_payment_for_interest() {
    let terms = [dec!(10), dec!(15), dec!(20), dec!(25), dec!(30)];
    let summaries = calculate_loan_options(&base(), LoanField::LoanTerm, &terms).unwrap();

    assert_eq!(summaries.len(), terms.len());
    for pair in summaries.windows(2) {
        assert!(pair[1].monthly_payment < pair[0].monthly_payment);
        assert!(pair[1].total_interest > pair[0].total_interest);
    }
}

#[test]
fn test_rate_sweep_raises_cost() {
    let rates = LoanField::InterestRate.default_candidates(&base());
    let summaries = calculate_loan_options(&base(), LoanField::InterestRate, &rates).unwrap();
    for pair in summaries.windows(2) {
        assert!(pair[1].monthly_payment > pair[0].monthly_payment);
        assert!(pair[1].total_cost > pair[0].total_cost);
    }
}

#[test]
fn test_each_option_matches_direct_calculation() {
    let amounts = [dec!(200000), dec!(350000)];
    let summaries = calculate_loan_options(&base(), LoanField::LoanAmount, &amounts).unwrap();

    for (amount, summary) in amounts.iter().zip(&summaries) {
        let direct = calculate_loan_summary(&LoanParams {
            loan_amount: *amount,
            ..base()
        })
        .unwrap();
        assert_eq!(&direct, summary);
    }
}

#[test]
fn test_base_params_untouched() {
    let params = base();
    let before = params.clone();
    calculate_loan_options(&params, LoanField::DownPayment, &[dec!(0), dec!(100000)]).unwrap();
    assert_eq!(params, before);
}

#[test]
fn test_empty_sweep_returns_nothing() {
    let summaries = calculate_loan_options(&base(), LoanField::LoanTerm, &[]).unwrap();
    assert!(summaries.is_empty());
}

#[test]
fn test_invalid_candidate_aborts_sweep() {
    let err = calculate_loan_options(
        &base(),
        LoanField::DownPayment,
        &[dec!(10000), dec!(400000)],
    )
    .unwrap_err();
    assert!(matches!(err, LoanError::InvalidParameters { .. }));

    let err = calculate_loan_options(&base(), LoanField::LoanTerm, &[dec!(7.5)]).unwrap_err();
    assert!(matches!(err, LoanError::InvalidParameters { .. }));
}

#[test]
fn test_compare_loans_rows() {
    let input = ComparisonInput {
        base: base(),
        field: LoanField::AdditionalPayment,
        values: vec![dec!(0), dec!(500)],
    };
    let output = compare_loans(&input).unwrap();
    let rows = &output.result.rows;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].months, 360);
    assert!(rows[1].months < 360);
    assert_eq!(rows[1].value, dec!(500));
    assert_eq!(output.result.cheapest_index, Some(1));
    assert!(output.warnings.is_empty());
}

#[test]
fn test_comparison_input_from_json() {
    let json = r#"{
        "base": {"loanAmount": 300000, "interestRate": 4.5, "loanTerm": 30, "downPayment": 60000},
        "field": "interestRate",
        "values": [3.0, 6.0]
    }"#;
    let input: ComparisonInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.field, LoanField::InterestRate);
    assert_eq!(input.values, vec![dec!(3), dec!(6)]);

    let output = compare_loans(&input).unwrap();
    assert!(output.result.rows[1].total_interest > output.result.rows[0].total_interest);
    assert_eq!(output.result.base_value, dec!(4.5));
}

#[test]
fn test_every_field_has_presets() {
    let small = LoanParams::new(dec!(80000), dec!(6), 15).with_down_payment(dec!(5000));
    for field in LoanField::ALL {
        let values = field.default_candidates(&base());
        assert!(!values.is_empty());
        assert!(values.iter().all(|v| *v >= Decimal::ZERO));
        assert!(calculate_loan_options(&base(), field, &values).is_ok());

        let values = field.default_candidates(&small);
        assert!(calculate_loan_options(&small, field, &values).is_ok());
    }
}
