use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MAX_TERM_YEARS;
use crate::error::LoanError;
use crate::types::{Money, Percentage};
use crate::LoanResult;

/// Input parameters for a single loan calculation.
///
/// Keys serialize in camelCase so parameter sets exported by the dashboard
/// deserialize unchanged. `down_payment` and `additional_payment` default to
/// zero when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanParams {
    /// Gross amount borrowed before the down payment
    pub loan_amount: Money,
    /// Nominal annual rate in percent (4.5 = 4.5%)
    pub interest_rate: Percentage,
    /// Term in years
    pub loan_term: u32,
    #[serde(default)]
    pub down_payment: Money,
    /// Constant extra amount paid every month on top of the scheduled payment
    #[serde(default)]
    pub additional_payment: Money,
}

impl LoanParams {
    pub fn new(loan_amount: Money, interest_rate: Percentage, loan_term: u32) -> Self {
        Self {
            loan_amount,
            interest_rate,
            loan_term,
            down_payment: Decimal::ZERO,
            additional_payment: Decimal::ZERO,
        }
    }

    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = down_payment;
        self
    }

    pub fn with_additional_payment(mut self, additional_payment: Money) -> Self {
        self.additional_payment = additional_payment;
        self
    }

    /// Loan amount less down payment: the balance interest accrues on.
    pub fn financed_principal(&self) -> Money {
        self.loan_amount - self.down_payment
    }

    /// Reject parameter sets that would otherwise produce meaningless
    /// arithmetic (negative balances, negative rates, zero-length terms).
    pub fn validate(&self) -> LoanResult<()> {
        if self.loan_amount < Decimal::ZERO {
            return Err(LoanError::invalid(
                "loanAmount",
                "Loan amount cannot be negative",
            ));
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(LoanError::invalid(
                "interestRate",
                "Interest rate cannot be negative",
            ));
        }
        if self.down_payment < Decimal::ZERO {
            return Err(LoanError::invalid(
                "downPayment",
                "Down payment cannot be negative",
            ));
        }
        if self.down_payment > self.loan_amount {
            return Err(LoanError::invalid(
                "downPayment",
                format!(
                    "Down payment {} exceeds loan amount {}",
                    self.down_payment, self.loan_amount
                ),
            ));
        }
        if self.additional_payment < Decimal::ZERO {
            return Err(LoanError::invalid(
                "additionalPayment",
                "Additional payment cannot be negative",
            ));
        }
        if self.loan_term > MAX_TERM_YEARS {
            return Err(LoanError::invalid(
                "loanTerm",
                format!("Loan term cannot exceed {MAX_TERM_YEARS} years"),
            ));
        }
        if self.loan_term == 0 && self.financed_principal() > Decimal::ZERO {
            return Err(LoanError::invalid(
                "loanTerm",
                "A non-zero principal needs a term of at least 1 year",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_optional_fields_default_to_zero() {
        let json = r#"{"loanAmount": 300000, "interestRate": 4.5, "loanTerm": 30}"#;
        let params: LoanParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.loan_amount, dec!(300000));
        assert_eq!(params.interest_rate, dec!(4.5));
        assert_eq!(params.loan_term, 30);
        assert_eq!(params.down_payment, Decimal::ZERO);
        assert_eq!(params.additional_payment, Decimal::ZERO);
    }

    #[test]
    fn test_financed_principal() {
        let params = LoanParams::new(dec!(300000), dec!(4.5), 30).with_down_payment(dec!(60000));
        assert_eq!(params.financed_principal(), dec!(240000));
    }

    #[test]
    fn test_validate_accepts_typical_loan() {
        let params = LoanParams::new(dec!(300000), dec!(4.5), 30)
            .with_down_payment(dec!(60000))
            .with_additional_payment(dec!(250));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_down_payment_above_amount() {
        let params = LoanParams::new(dec!(100), dec!(4.5), 30).with_down_payment(dec!(101));
        match params.validate() {
            Err(LoanError::InvalidParameters { field, .. }) => assert_eq!(field, "downPayment"),
            other => panic!("Expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_zero_term_only_matters_with_principal() {
        assert!(LoanParams::new(dec!(1000), dec!(5), 0).validate().is_err());
        assert!(LoanParams::new(dec!(0), dec!(5), 0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_excessive_term() {
        assert!(LoanParams::new(dec!(1000), dec!(5), 100).validate().is_ok());
        match LoanParams::new(dec!(1000), dec!(0), 300_000_000).validate() {
            Err(LoanError::InvalidParameters { field, .. }) => assert_eq!(field, "loanTerm"),
            other => panic!("Expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        assert!(LoanParams::new(dec!(1000), dec!(-1), 10).validate().is_err());
    }
}
