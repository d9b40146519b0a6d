pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Row-oriented payload nested in a result object (comparison rows, a
/// schedule page, an included schedule), if any.
pub(crate) fn tabular_rows(result: &Map<String, Value>) -> Option<&Vec<Value>> {
    ["rows", "amortizationSchedule"]
        .iter()
        .find_map(|key| result.get(*key).and_then(Value::as_array))
}
