use clap::Args;
use serde_json::Value;
use std::time::Instant;

use loan_amortization_core::amortization::calculate_loan_summary;
use loan_amortization_core::display::{
    annual_breakdown, cost_breakdown, first_payment_split, payment_distribution, schedule_page,
    SchedulePageRequest,
};
use loan_amortization_core::types::with_metadata;

use crate::input::LoanArgs;

/// Arguments for the principal/interest distribution view
#[derive(Args)]
pub struct DistributionArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_distribution(args: DistributionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params = args.loan.resolve()?;
    let summary = calculate_loan_summary(&params)?;

    let result = serde_json::json!({
        "firstPayment": first_payment_split(&summary),
        "costBreakdown": cost_breakdown(&params, &summary),
        "series": payment_distribution(&summary.amortization_schedule),
    });

    let output = with_metadata(
        "Principal vs interest distribution (sampled to ~20 points)",
        &params,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    );
    Ok(serde_json::to_value(output)?)
}

/// Arguments for the annual breakdown
#[derive(Args)]
pub struct YearlyArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_yearly(args: YearlyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params = args.loan.resolve()?;
    let summary = calculate_loan_summary(&params)?;

    let output = with_metadata(
        "Annual roll-up of the amortization schedule",
        &params,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        annual_breakdown(&summary.amortization_schedule)?,
    );
    Ok(serde_json::to_value(output)?)
}

/// Arguments for one page of the schedule table
#[derive(Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 12)]
    pub page_size: usize,

    /// Only months whose number contains this text
    #[arg(long)]
    pub month: Option<String>,
}

pub fn run_page(args: PageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params = args.loan.resolve()?;
    let summary = calculate_loan_summary(&params)?;

    let request = SchedulePageRequest {
        page: args.page,
        page_size: args.page_size,
        month_filter: args.month,
    };
    let page = schedule_page(&summary.amortization_schedule, &request);

    let mut warnings = Vec::new();
    if page.page != request.page && page.total_pages > 0 {
        warnings.push(format!(
            "Page {} is out of range; showing page {} of {}",
            request.page, page.page, page.total_pages
        ));
    }

    let output = with_metadata(
        "Paged amortization schedule",
        &serde_json::json!({ "params": params, "request": request }),
        warnings,
        start.elapsed().as_micros() as u64,
        page,
    );
    Ok(serde_json::to_value(output)?)
}
