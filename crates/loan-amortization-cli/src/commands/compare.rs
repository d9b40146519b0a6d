use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_amortization_core::comparison::{compare_loans, ComparisonInput, LoanField};
use loan_amortization_core::display::{format_currency_whole, format_percentage};

use crate::input::LoanArgs;

/// Arguments for a single-parameter comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Parameter to vary: loan-term, interest-rate, loan-amount, down-payment, additional-payment
    #[arg(long)]
    pub field: LoanField,

    /// Candidate values (comma-separated); presets are used when omitted
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<Decimal>>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = ComparisonInput {
        base: args.loan.resolve()?,
        field: args.field,
        values: args.values.unwrap_or_default(),
    };
    let output = compare_loans(&input)?;
    let labels: Vec<String> = output
        .result
        .rows
        .iter()
        .map(|row| label_for(input.field, row.value))
        .collect();

    let mut value = serde_json::to_value(output)?;
    if let Some(Value::Array(rows)) = value.pointer_mut("/result/rows") {
        for (row, label) in rows.iter_mut().zip(labels) {
            if let Value::Object(map) = row {
                map.insert("label".into(), Value::String(label));
            }
        }
    }
    Ok(value)
}

/// Human label for a candidate value, as shown in the comparison table.
fn label_for(field: LoanField, value: Decimal) -> String {
    match field {
        LoanField::LoanTerm => format!("{} years", value.normalize()),
        LoanField::InterestRate => format_percentage(value),
        LoanField::LoanAmount | LoanField::DownPayment | LoanField::AdditionalPayment => {
            format_currency_whole(value)
        }
    }
}
