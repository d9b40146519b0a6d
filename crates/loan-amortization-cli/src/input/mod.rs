pub mod file;
pub mod stdin;

use clap::Args;
use rust_decimal::Decimal;

use loan_amortization_core::amortization::LoanParams;

/// Loan parameters shared by every command.
///
/// Precedence: `--input` file, then JSON or YAML piped on stdin, then the flags.
#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Path to a JSON or YAML file holding the loan parameters
    #[arg(long)]
    pub input: Option<String>,

    /// Gross amount borrowed before the down payment
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Nominal annual interest rate in percent (4.5 = 4.5%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Term in years
    #[arg(long)]
    pub loan_term: Option<u32>,

    /// Down payment subtracted from the loan amount
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Extra amount paid every month
    #[arg(long, default_value = "0")]
    pub additional_payment: Decimal,
}

impl LoanArgs {
    pub fn resolve(&self) -> Result<LoanParams, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return file::read_input(path);
        }
        if let Some(params) = stdin::read_stdin()? {
            return Ok(params);
        }

        let loan_amount = self
            .loan_amount
            .ok_or("--loan-amount is required (or provide --input)")?;
        let interest_rate = self
            .interest_rate
            .ok_or("--interest-rate is required (or provide --input)")?;
        let loan_term = self
            .loan_term
            .ok_or("--loan-term is required (or provide --input)")?;

        Ok(LoanParams::new(loan_amount, interest_rate, loan_term)
            .with_down_payment(self.down_payment)
            .with_additional_payment(self.additional_payment))
    }
}
