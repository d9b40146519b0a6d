use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::PaymentDetails;
use crate::time_value::MONTHS_PER_YEAR;
use crate::error::LoanError;
use crate::types::Money;
use crate::LoanResult;

/// Schedule totals for one loan year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualPeriod {
    pub year: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Balance after the year's last scheduled month
    pub ending_balance: Money,
    /// Cumulative interest at year end
    pub total_interest: Money,
    /// Interest as a share of the year's payments, in percent
    pub interest_share_pct: Decimal,
}

/// Roll a monthly schedule up into loan years (months 1–12 are year 1).
///
/// A year in which the loan is paid off part-way contains only the months
/// actually scheduled; years after payoff do not appear.
pub fn annual_breakdown(schedule: &[PaymentDetails]) -> LoanResult<Vec<AnnualPeriod>> {
    let mut years: Vec<AnnualPeriod> = Vec::new();

    for row in schedule {
        let year = (row.month - 1) / MONTHS_PER_YEAR + 1;
        match years.last_mut() {
            Some(period) if period.year == year => {
                period.payment = add(period.payment, row.payment, year)?;
                period.principal = add(period.principal, row.principal, year)?;
                period.interest = add(period.interest, row.interest, year)?;
                period.ending_balance = row.balance;
                period.total_interest = row.total_interest;
            }
            _ => years.push(AnnualPeriod {
                year,
                payment: row.payment,
                principal: row.principal,
                interest: row.interest,
                ending_balance: row.balance,
                total_interest: row.total_interest,
                interest_share_pct: Decimal::ZERO,
            }),
        }
    }

    for period in &mut years {
        if !period.payment.is_zero() {
            period.interest_share_pct = period.interest / period.payment * Decimal::ONE_HUNDRED;
        }
    }

    Ok(years)
}

fn add(total: Money, amount: Money, year: u32) -> LoanResult<Money> {
    total
        .checked_add(amount)
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: format!("payments in loan year {year}"),
        })
}
