use rust_decimal::Decimal;

use super::MAX_TERM_YEARS;
use crate::error::LoanError;
use crate::time_value::{monthly_rate, pmt, term_months};
use crate::types::{Money, Percentage};
use crate::LoanResult;

/// Fixed monthly payment that fully amortizes `principal` over `term_years`
/// at a nominal annual rate of `annual_rate_pct` percent, compounded monthly.
///
/// - zero principal pays nothing, whatever the term
/// - a zero rate repays principal in equal straight-line instalments
/// - a zero term with a non-zero principal is rejected, as is any term
///   longer than [`MAX_TERM_YEARS`]
///
/// The result is not rounded.
pub fn calculate_monthly_payment(
    principal: Money,
    annual_rate_pct: Percentage,
    term_years: u32,
) -> LoanResult<Money> {
    if principal < Decimal::ZERO {
        return Err(LoanError::invalid(
            "principal",
            "Principal cannot be negative",
        ));
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(LoanError::invalid(
            "interestRate",
            "Interest rate cannot be negative",
        ));
    }
    if term_years > MAX_TERM_YEARS {
        return Err(LoanError::invalid(
            "loanTerm",
            format!("Loan term cannot exceed {MAX_TERM_YEARS} years"),
        ));
    }
    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let nper = term_months(term_years)?;
    if nper == 0 {
        return Err(LoanError::invalid(
            "loanTerm",
            "A non-zero principal needs a term of at least 1 year",
        ));
    }

    pmt(monthly_rate(annual_rate_pct), nper, principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::MathematicalOps;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_thirty_year_mortgage() {
        let payment = calculate_monthly_payment(dec!(240000), dec!(4.5), 30).unwrap();
        assert!(
            (payment - dec!(1216.04)).abs() < dec!(0.01),
            "Expected ~1216.04, got {payment}"
        );
    }

    #[test]
    fn test_matches_closed_form() {
        let r = dec!(0.065) / dec!(12);
        let n = 180u64;
        let growth = (Decimal::ONE + r).powu(n);
        let expected = dec!(185000) * r * growth / (growth - Decimal::ONE);

        let payment = calculate_monthly_payment(dec!(185000), dec!(6.5), 15).unwrap();
        let relative = ((payment - expected) / expected).abs();
        assert!(relative < dec!(0.000000001), "relative error {relative}");
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = calculate_monthly_payment(dec!(100000), Decimal::ZERO, 10).unwrap();
        assert_eq!(payment, dec!(100000) / dec!(120));
    }

    #[test]
    fn test_zero_principal_pays_nothing() {
        assert_eq!(
            calculate_monthly_payment(Decimal::ZERO, dec!(5), 30).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_monthly_payment(Decimal::ZERO, dec!(5), 0).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_zero_term_with_principal_rejected() {
        let err = calculate_monthly_payment(dec!(1000), dec!(5), 0).unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters { .. }));

        // Zero rate must not fall through to a division by zero
        let err = calculate_monthly_payment(dec!(1000), Decimal::ZERO, 0).unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters { .. }));
    }

    #[test]
    fn test_excessive_term_rejected_before_scheduling() {
        let err = calculate_monthly_payment(dec!(1000), Decimal::ZERO, 300_000_000).unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters { .. }));
        assert!(calculate_monthly_payment(dec!(1000), dec!(5), 100).is_ok());
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(calculate_monthly_payment(dec!(-1), dec!(5), 30).is_err());
        assert!(calculate_monthly_payment(dec!(1000), dec!(-0.5), 30).is_err());
    }

    #[test]
    fn test_absurd_rate_overflows_cleanly() {
        let err = calculate_monthly_payment(dec!(1000), dec!(100000), 40).unwrap_err();
        assert!(matches!(err, LoanError::ArithmeticOverflow { .. }));
    }
}
