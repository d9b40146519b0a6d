//! Core amortization engine: payment calculation, schedule generation and
//! summary aggregation for fixed-rate, fully amortizing loans.

pub mod params;
pub mod payment;
pub mod schedule;
pub mod summary;

pub use params::LoanParams;
pub use payment::calculate_monthly_payment;
pub use schedule::{analyze_schedule, generate_amortization_schedule, PaymentDetails};
pub use summary::{analyze_loan, calculate_loan_summary, LoanSummary};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Longest term accepted, in years.
pub const MAX_TERM_YEARS: u32 = 100;

/// Residual balance below which a loan counts as paid off (half a cent).
pub const DUST_THRESHOLD: Decimal = dec!(0.005);
