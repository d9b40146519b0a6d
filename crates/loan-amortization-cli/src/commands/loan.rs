use clap::Args;
use serde_json::Value;
use std::time::Instant;

use loan_amortization_core::amortization::{
    analyze_loan, analyze_schedule, calculate_monthly_payment,
};
use loan_amortization_core::display::sample_every;
use loan_amortization_core::types::with_metadata;

use crate::input::LoanArgs;

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params = args.loan.resolve()?;
    params.validate()?;

    let principal = params.financed_principal();
    let nominal = calculate_monthly_payment(principal, params.interest_rate, params.loan_term)?;

    let result = serde_json::json!({
        "monthlyPayment": (nominal + params.additional_payment).to_string(),
        "nominalPayment": nominal.to_string(),
        "additionalPayment": params.additional_payment.to_string(),
        "financedPrincipal": principal.to_string(),
    });

    let output = with_metadata(
        "Annuity payment (monthly compounding)",
        &params,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    );
    Ok(serde_json::to_value(output)?)
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Keep only every Nth month (12 = one row per year)
    #[arg(long)]
    pub every: Option<usize>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.loan.resolve()?;
    let mut output = analyze_schedule(&params)?;
    if let Some(interval) = args.every {
        output.result = sample_every(&output.result, interval);
    }
    Ok(serde_json::to_value(output)?)
}

/// Arguments for the loan summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Include the full month-by-month schedule in the output
    #[arg(long)]
    pub include_schedule: bool,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.loan.resolve()?;
    let output = analyze_loan(&params)?;
    let months = output.result.months();

    let mut value = serde_json::to_value(output)?;
    if let Some(Value::Object(result)) = value.get_mut("result") {
        result.insert("months".into(), Value::from(months));
        if !args.include_schedule {
            result.remove("amortizationSchedule");
        }
    }
    Ok(value)
}
