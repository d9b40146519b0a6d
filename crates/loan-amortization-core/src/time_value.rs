use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanError;
use crate::types::{Money, Percentage, Rate};
use crate::LoanResult;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert a quoted annual percentage into a monthly decimal rate.
///
/// `4.5` (percent) becomes `0.00375` per month.
pub fn monthly_rate(annual_rate_pct: Percentage) -> Rate {
    annual_rate_pct / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly periods in a term quoted in years.
pub fn term_months(term_years: u32) -> LoanResult<u32> {
    term_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: format!("term of {term_years} years in months"),
        })
}

/// Compound growth factor `(1 + rate)^nper`.
pub fn compound_factor(rate: Rate, nper: u32) -> LoanResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(nper))
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: format!("compound factor (1 + {rate})^{nper}"),
        })
}

/// Level payment that amortizes `principal` over `nper` periods at `rate`.
///
/// Returned as a positive outflow. A zero rate degrades to straight-line
/// repayment.
pub fn pmt(rate: Rate, nper: u32, principal: Money) -> LoanResult<Money> {
    if nper == 0 {
        return Err(LoanError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(LoanError::DivisionByZero {
            context: "PMT annuity factor".into(),
        });
    }

    let numerator = principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: "PMT numerator".into(),
        })?;

    numerator
        .checked_div(denominator)
        .ok_or_else(|| LoanError::ArithmeticOverflow {
            context: "PMT annuity division".into(),
        })
}
