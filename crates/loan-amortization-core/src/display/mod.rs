//! Read-only views over a computed schedule for charts, tables and labels.
//!
//! Nothing in here feeds back into the engine; every function takes a
//! finished schedule or summary and reshapes it.

pub mod annual;
pub mod distribution;
pub mod format;
pub mod paging;

pub use annual::{annual_breakdown, AnnualPeriod};
pub use distribution::{
    cost_breakdown, first_payment_split, payment_distribution, sample_every, CostBreakdown,
    PaymentDistribution, PaymentSplit,
};
pub use format::{format_currency, format_currency_whole, format_percentage};
pub use paging::{schedule_page, SchedulePage, SchedulePageRequest};
