pub mod amortization;
pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "display")]
pub mod display;

pub use error::LoanError;
pub use types::*;

/// Standard result type for all loan-amortization operations
pub type LoanResult<T> = Result<T, LoanError>;
