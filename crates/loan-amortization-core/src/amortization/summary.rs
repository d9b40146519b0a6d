use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::params::LoanParams;
use super::payment::calculate_monthly_payment;
use super::schedule::{generate_amortization_schedule, PaymentDetails};
use super::DUST_THRESHOLD;
use crate::error::LoanError;
use crate::time_value::term_months;
use crate::types::*;
use crate::LoanResult;

/// Aggregate result of a single loan calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    /// Nominal fixed payment plus the additional payment (first month's outlay)
    pub monthly_payment: Money,
    /// Sum of every scheduled payment
    pub total_payments: Money,
    /// Sum of every month's interest
    pub total_interest: Money,
    /// Total payments plus the down payment
    pub total_cost: Money,
    pub amortization_schedule: Vec<PaymentDetails>,
}

impl LoanSummary {
    /// Number of months until payoff (or term end).
    pub fn months(&self) -> usize {
        self.amortization_schedule.len()
    }

    /// Balance left after the last scheduled month.
    pub fn final_balance(&self) -> Money {
        self.amortization_schedule
            .last()
            .map(|p| p.balance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Compute the payment, schedule and totals for one parameter set.
///
/// Pure: identical parameters always produce an identical summary.
pub fn calculate_loan_summary(params: &LoanParams) -> LoanResult<LoanSummary> {
    params.validate()?;

    let principal = params.financed_principal();
    let nominal_payment =
        calculate_monthly_payment(principal, params.interest_rate, params.loan_term)?;
    let amortization_schedule = generate_amortization_schedule(
        principal,
        params.interest_rate,
        params.loan_term,
        params.additional_payment,
    )?;

    let total_payments = checked_total(
        amortization_schedule.iter().map(|p| p.payment),
        "total payments",
    )?;
    let total_interest = checked_total(
        amortization_schedule.iter().map(|p| p.interest),
        "total interest",
    )?;
    let monthly_payment = nominal_payment
        .checked_add(params.additional_payment)
        .ok_or_else(|| overflow("monthly payment"))?;
    let total_cost = total_payments
        .checked_add(params.down_payment)
        .ok_or_else(|| overflow("total cost"))?;

    Ok(LoanSummary {
        monthly_payment,
        total_payments,
        total_interest,
        total_cost,
        amortization_schedule,
    })
}

fn overflow(context: &str) -> LoanError {
    LoanError::ArithmeticOverflow {
        context: context.to_string(),
    }
}

/// Left-to-right sum that reports overflow instead of panicking.
fn checked_total(mut amounts: impl Iterator<Item = Money>, context: &str) -> LoanResult<Money> {
    amounts
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| overflow(context))
}

/// Loan summary wrapped in the standard output envelope, with warnings for
/// degenerate inputs and the effect of any additional payment.
pub fn analyze_loan(params: &LoanParams) -> LoanResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let summary = calculate_loan_summary(params)?;

    if params.financed_principal().is_zero() {
        warnings.push("Financed principal is zero; no payments are scheduled".into());
    } else if params.interest_rate.is_zero() {
        warnings.push("Zero interest rate: principal is repaid straight-line".into());
    }

    if params.additional_payment > Decimal::ZERO && !params.financed_principal().is_zero() {
        let baseline = calculate_loan_summary(&LoanParams {
            additional_payment: Decimal::ZERO,
            ..params.clone()
        })?;
        let months_saved = baseline.months().saturating_sub(summary.months());
        let interest_saved = baseline.total_interest - summary.total_interest;
        warnings.push(format!(
            "Additional payment of {} shortens payoff by {} months and saves {} in interest",
            params.additional_payment,
            months_saved,
            interest_saved.round_dp(2)
        ));
    }

    let final_balance = summary.final_balance();
    if final_balance > DUST_THRESHOLD {
        tracing::warn!(final_balance = %final_balance, "loan not fully amortized");
        warnings.push(format!(
            "Residual balance {final_balance} remains after the final scheduled month"
        ));
    }

    let nominal_months = term_months(params.loan_term)?;
    tracing::debug!(
        monthly_payment = %summary.monthly_payment,
        total_interest = %summary.total_interest,
        months = summary.months(),
        nominal_months,
        "calculated loan summary"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate loan amortization (monthly compounding, annuity payment)",
        &serde_json::json!({
            "params": params,
            "financed_principal": params.financed_principal().to_string(),
            "nominal_months": nominal_months,
        }),
        warnings,
        elapsed,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_loan() -> LoanParams {
        LoanParams::new(dec!(300000), dec!(4.5), 30).with_down_payment(dec!(60000))
    }

    #[test]
    fn test_reference_loan_summary() {
        let summary = calculate_loan_summary(&reference_loan()).unwrap();
        assert!((summary.monthly_payment - dec!(1216.04)).abs() < dec!(0.01));
        assert_eq!(summary.months(), 360);
        assert!(summary.final_balance().abs() < dec!(0.000001));
        assert!(
            (summary.total_interest - dec!(197776.11)).abs() < dec!(1),
            "total interest {}",
            summary.total_interest
        );
    }

    #[test]
    fn test_totals_match_running_totals() {
        let summary = calculate_loan_summary(&reference_loan().with_additional_payment(dec!(150)))
            .unwrap();
        let last = summary.amortization_schedule.last().unwrap();
        assert_eq!(summary.total_interest, last.total_interest);
        assert_eq!(
            summary.total_cost,
            summary.total_payments + dec!(60000)
        );
    }

    #[test]
    fn test_monthly_payment_includes_additional() {
        let base = calculate_loan_summary(&reference_loan()).unwrap();
        let extra = calculate_loan_summary(&reference_loan().with_additional_payment(dec!(500)))
            .unwrap();
        assert_eq!(extra.monthly_payment, base.monthly_payment + dec!(500));
    }

    #[test]
    fn test_all_down_payment_costs_only_the_down_payment() {
        let params = LoanParams::new(dec!(50000), dec!(5), 15).with_down_payment(dec!(50000));
        let summary = calculate_loan_summary(&params).unwrap();
        assert_eq!(summary.monthly_payment, Decimal::ZERO);
        assert!(summary.amortization_schedule.is_empty());
        assert_eq!(summary.total_cost, dec!(50000));
    }

    #[test]
    fn test_analyze_loan_reports_savings() {
        let output = analyze_loan(&reference_loan().with_additional_payment(dec!(500))).unwrap();
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("shortens payoff by")));
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_huge_principal_overflows_cleanly() {
        let principal: Decimal = "60000000000000000000000000000".parse().unwrap();
        let err = calculate_loan_summary(&LoanParams::new(principal, dec!(5), 30)).unwrap_err();
        assert!(matches!(err, LoanError::ArithmeticOverflow { .. }), "got {err:?}");
    }

    #[test]
    fn test_analyze_loan_flags_zero_rate() {
        let output = analyze_loan(&LoanParams::new(dec!(1000), Decimal::ZERO, 1)).unwrap();
        assert!(output.warnings.iter().any(|w| w.contains("straight-line")));
    }
}
