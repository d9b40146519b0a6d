use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::amortization::{calculate_loan_summary, LoanParams, LoanSummary};
use crate::error::LoanError;
use crate::types::*;
use crate::LoanResult;

/// The `LoanParams` field a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanField {
    LoanAmount,
    InterestRate,
    LoanTerm,
    DownPayment,
    AdditionalPayment,
}

impl LoanField {
    pub const ALL: [LoanField; 5] = [
        LoanField::LoanAmount,
        LoanField::InterestRate,
        LoanField::LoanTerm,
        LoanField::DownPayment,
        LoanField::AdditionalPayment,
    ];

    /// Copy of `base` with only this field replaced by `value`.
    pub fn apply(self, base: &LoanParams, value: Decimal) -> LoanResult<LoanParams> {
        let params = match self {
            LoanField::LoanAmount => LoanParams {
                loan_amount: value,
                ..base.clone()
            },
            LoanField::InterestRate => LoanParams {
                interest_rate: value,
                ..base.clone()
            },
            LoanField::LoanTerm => LoanParams {
                loan_term: whole_years(value)?,
                ..base.clone()
            },
            LoanField::DownPayment => LoanParams {
                down_payment: value,
                ..base.clone()
            },
            LoanField::AdditionalPayment => LoanParams {
                additional_payment: value,
                ..base.clone()
            },
        };
        Ok(params)
    }

    /// Current value of this field in `params`.
    pub fn value_of(self, params: &LoanParams) -> Decimal {
        match self {
            LoanField::LoanAmount => params.loan_amount,
            LoanField::InterestRate => params.interest_rate,
            LoanField::LoanTerm => Decimal::from(params.loan_term),
            LoanField::DownPayment => params.down_payment,
            LoanField::AdditionalPayment => params.additional_payment,
        }
    }

    /// Preset candidates offered by the comparison dashboard.
    ///
    /// Down payments are a ladder of 0–40% of the base loan amount, and loan
    /// amounts below the base down payment are left out, so every preset is
    /// valid for `base`.
    pub fn default_candidates(self, base: &LoanParams) -> Vec<Decimal> {
        match self {
            LoanField::LoanTerm => vec![dec!(10), dec!(15), dec!(20), dec!(25), dec!(30)],
            LoanField::InterestRate => vec![
                dec!(3.0),
                dec!(3.5),
                dec!(4.0),
                dec!(4.5),
                dec!(5.0),
                dec!(5.5),
            ],
            LoanField::LoanAmount => [
                dec!(200000),
                dec!(250000),
                dec!(300000),
                dec!(350000),
                dec!(400000),
            ]
            .into_iter()
            .filter(|amount| *amount >= base.down_payment)
            .collect(),
            LoanField::DownPayment => [dec!(0), dec!(0.1), dec!(0.2), dec!(0.3), dec!(0.4)]
                .into_iter()
                .map(|share| base.loan_amount * share)
                .collect(),
            LoanField::AdditionalPayment => {
                vec![dec!(0), dec!(100), dec!(250), dec!(500), dec!(1000)]
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoanField::LoanAmount => "loanAmount",
            LoanField::InterestRate => "interestRate",
            LoanField::LoanTerm => "loanTerm",
            LoanField::DownPayment => "downPayment",
            LoanField::AdditionalPayment => "additionalPayment",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanField {
    type Err = LoanError;

    /// Accepts camelCase, kebab-case, snake_case and the short dashboard
    /// names (`amount`, `rate`, `term`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "loanamount" | "amount" => Ok(LoanField::LoanAmount),
            "interestrate" | "rate" => Ok(LoanField::InterestRate),
            "loanterm" | "term" => Ok(LoanField::LoanTerm),
            "downpayment" | "down" => Ok(LoanField::DownPayment),
            "additionalpayment" | "extra" => Ok(LoanField::AdditionalPayment),
            _ => Err(LoanError::invalid(
                "field",
                format!("Unknown loan field '{s}'"),
            )),
        }
    }
}

fn whole_years(value: Decimal) -> LoanResult<u32> {
    if value < Decimal::ZERO || !value.fract().is_zero() {
        return Err(LoanError::invalid(
            "loanTerm",
            format!("Loan term must be a whole number of years, got {value}"),
        ));
    }
    value.to_u32().ok_or_else(|| {
        LoanError::invalid("loanTerm", format!("Loan term {value} is out of range"))
    })
}

/// Evaluate `base` once per candidate value of `field`.
///
/// Output order matches `values`. Each evaluation works on its own copy of
/// the parameters; the first invalid candidate aborts the sweep.
pub fn calculate_loan_options(
    base: &LoanParams,
    field: LoanField,
    values: &[Decimal],
) -> LoanResult<Vec<LoanSummary>> {
    values
        .iter()
        .map(|value| {
            let params = field.apply(base, *value)?;
            calculate_loan_summary(&params)
        })
        .collect()
}

/// Input for a side-by-side loan comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    pub base: LoanParams,
    pub field: LoanField,
    /// Candidate values; the field's presets are used when empty
    #[serde(default)]
    pub values: Vec<Decimal>,
}

/// One candidate's headline figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub value: Decimal,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_cost: Money,
    /// Total cost less total interest (financed principal plus down payment)
    pub principal: Money,
    pub months: usize,
}

/// Output of a loan comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutput {
    pub field: LoanField,
    pub base_value: Decimal,
    pub rows: Vec<ComparisonRow>,
    /// Index of the row with the lowest total cost
    pub cheapest_index: Option<usize>,
}

/// Run a comparison sweep and tabulate the headline figures per candidate.
pub fn compare_loans(input: &ComparisonInput) -> LoanResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let values = if input.values.is_empty() {
        warnings.push(format!(
            "No candidate values supplied for {}; using presets",
            input.field
        ));
        input.field.default_candidates(&input.base)
    } else {
        input.values.clone()
    };

    let summaries = calculate_loan_options(&input.base, input.field, &values)?;

    let rows: Vec<ComparisonRow> = values
        .iter()
        .zip(&summaries)
        .map(|(value, summary)| ComparisonRow {
            value: *value,
            monthly_payment: summary.monthly_payment,
            total_interest: summary.total_interest,
            total_cost: summary.total_cost,
            principal: summary.total_cost - summary.total_interest,
            months: summary.months(),
        })
        .collect();

    let cheapest_index = rows
        .iter()
        .enumerate()
        .min_by_key(|(_, row)| row.total_cost)
        .map(|(i, _)| i);

    tracing::debug!(
        field = %input.field,
        candidates = rows.len(),
        "compared loan options"
    );

    let output = ComparisonOutput {
        field: input.field,
        base_value: input.field.value_of(&input.base),
        rows,
        cheapest_index,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Single-parameter loan comparison",
        &serde_json::json!({
            "base": input.base,
            "field": input.field,
            "values": values,
        }),
        warnings,
        elapsed,
        output,
    ))
}
