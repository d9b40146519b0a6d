//! Parameter sweeps: the same loan evaluated with one field varied.

pub mod sweep;

pub use sweep::{
    calculate_loan_options, compare_loans, ComparisonInput, ComparisonOutput, ComparisonRow,
    LoanField,
};
