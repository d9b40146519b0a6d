use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::params::LoanParams;
use super::payment::calculate_monthly_payment;
use super::DUST_THRESHOLD;
use crate::error::LoanError;
use crate::time_value::{monthly_rate, term_months};
use crate::types::*;
use crate::LoanResult;

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    /// 1-based month number
    pub month: u32,
    /// Principal plus interest actually applied this month
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Principal outstanding after this month's payment
    pub balance: Money,
    /// Cumulative interest from month 1 through this month
    pub total_interest: Money,
}

/// Build the month-by-month schedule for a fixed-rate loan.
///
/// Each month accrues interest on the opening balance and applies the rest of
/// the payment (regular plus `additional_payment`) to principal. Principal is
/// capped at the outstanding balance, so the final month may be smaller than
/// the others. Generation stops at payoff or after `term_years * 12` months.
pub fn generate_amortization_schedule(
    principal: Money,
    annual_rate_pct: Percentage,
    term_years: u32,
    additional_payment: Money,
) -> LoanResult<Vec<PaymentDetails>> {
    if additional_payment < Decimal::ZERO {
        return Err(LoanError::invalid(
            "additionalPayment",
            "Additional payment cannot be negative",
        ));
    }

    let regular_payment = calculate_monthly_payment(principal, annual_rate_pct, term_years)?;
    let scheduled_payment = regular_payment
        .checked_add(additional_payment)
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: "scheduled monthly payment".into(),
        })?;
    let rate = monthly_rate(annual_rate_pct);
    let nper = term_months(term_years)?;

    let mut schedule = Vec::with_capacity(nper as usize);
    let mut balance = principal;
    let mut total_interest = Decimal::ZERO;
    let mut month = 1u32;

    while month <= nper && balance > Decimal::ZERO {
        let interest = balance
            .checked_mul(rate)
            .ok_or_else(|| LoanError::ArithmeticOverflow {
                context: format!("interest for month {month}"),
            })?;

        let mut principal_paid = scheduled_payment - interest;
        // Final month: never repay more than is owed
        if principal_paid > balance {
            principal_paid = balance;
        }

        balance -= principal_paid;
        total_interest = total_interest
            .checked_add(interest)
            .ok_or_else(|| LoanError::ArithmeticOverflow {
                context: format!("cumulative interest at month {month}"),
            })?;

        schedule.push(PaymentDetails {
            month,
            payment: principal_paid + interest,
            principal: principal_paid,
            interest,
            balance,
            total_interest,
        });

        month += 1;
    }

    tracing::debug!(
        principal = %principal,
        annual_rate_pct = %annual_rate_pct,
        term_years,
        months = schedule.len(),
        final_balance = %balance,
        "generated amortization schedule"
    );

    Ok(schedule)
}

/// Schedule generation for a full parameter set, wrapped in the standard
/// output envelope.
pub fn analyze_schedule(
    params: &LoanParams,
) -> LoanResult<ComputationOutput<Vec<PaymentDetails>>> {
    let start = Instant::now();
    params.validate()?;

    let schedule = generate_amortization_schedule(
        params.financed_principal(),
        params.interest_rate,
        params.loan_term,
        params.additional_payment,
    )?;

    let mut warnings = Vec::new();
    if let Some(last) = schedule.last() {
        if last.balance > DUST_THRESHOLD {
            warnings.push(format!(
                "Schedule ends at month {} with residual balance {}",
                last.month, last.balance
            ));
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate amortization schedule (interest first, then principal)",
        params,
        warnings,
        elapsed,
        schedule,
    ))
}
