use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use loan_amortization_core::amortization::{self, LoanParams};
use loan_amortization_core::comparison::{self, ComparisonInput};
use loan_amortization_core::display::{self, SchedulePageRequest};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_params(input_json: &str) -> NapiResult<LoanParams> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

fn parse_decimal(value: &str) -> NapiResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentInput {
    principal: Decimal,
    interest_rate: Decimal,
    loan_term: u32,
}

/// Returns the bare monthly payment as a decimal string.
#[napi]
pub fn calculate_monthly_payment(input_json: String) -> NapiResult<String> {
    let input: PaymentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = amortization::calculate_monthly_payment(
        input.principal,
        input.interest_rate,
        input.loan_term,
    )
    .map_err(to_napi_error)?;
    Ok(payment.to_string())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleInput {
    principal: Decimal,
    interest_rate: Decimal,
    loan_term: u32,
    #[serde(default)]
    additional_payment: Decimal,
}

#[napi]
pub fn generate_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: ScheduleInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule = amortization::generate_amortization_schedule(
        input.principal,
        input.interest_rate,
        input.loan_term,
        input.additional_payment,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

#[napi]
pub fn calculate_loan_summary(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let summary = amortization::calculate_loan_summary(&params).map_err(to_napi_error)?;
    serde_json::to_string(&summary).map_err(to_napi_error)
}

/// Summary wrapped in the metadata envelope, with warnings.
#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let output = amortization::analyze_loan(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan_options(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let values = if input.values.is_empty() {
        input.field.default_candidates(&input.base)
    } else {
        input.values
    };
    let summaries = comparison::calculate_loan_options(&input.base, input.field, &values)
        .map_err(to_napi_error)?;
    serde_json::to_string(&summaries).map_err(to_napi_error)
}

#[napi]
pub fn compare_loans(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = comparison::compare_loans(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[napi]
pub fn payment_distribution(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let summary = amortization::calculate_loan_summary(&params).map_err(to_napi_error)?;
    let view = serde_json::json!({
        "firstPayment": display::first_payment_split(&summary),
        "costBreakdown": display::cost_breakdown(&params, &summary),
        "series": display::payment_distribution(&summary.amortization_schedule),
    });
    serde_json::to_string(&view).map_err(to_napi_error)
}

#[napi]
pub fn annual_breakdown(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let summary = amortization::calculate_loan_summary(&params).map_err(to_napi_error)?;
    let years =
        display::annual_breakdown(&summary.amortization_schedule).map_err(to_napi_error)?;
    serde_json::to_string(&years).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct PageInput {
    params: LoanParams,
    #[serde(default)]
    request: SchedulePageRequest,
}

#[napi]
pub fn schedule_page(input_json: String) -> NapiResult<String> {
    let input: PageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let summary = amortization::calculate_loan_summary(&input.params).map_err(to_napi_error)?;
    let page = display::schedule_page(&summary.amortization_schedule, &input.request);
    serde_json::to_string(&page).map_err(to_napi_error)
}

#[napi]
pub fn format_currency(amount: String) -> NapiResult<String> {
    Ok(display::format_currency(parse_decimal(&amount)?))
}

#[napi]
pub fn format_percentage(value: String) -> NapiResult<String> {
    Ok(display::format_percentage(parse_decimal(&value)?))
}
