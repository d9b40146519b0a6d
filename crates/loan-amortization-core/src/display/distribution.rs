use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{LoanParams, LoanSummary, PaymentDetails};
use crate::types::Money;

/// Target number of points in a sampled chart series.
const DISTRIBUTION_POINTS: usize = 20;

/// Principal and interest series sampled from a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDistribution {
    pub labels: Vec<String>,
    pub principal: Vec<Money>,
    pub interest: Vec<Money>,
}

/// Sample roughly twenty evenly spaced months of principal and interest.
///
/// The sampling interval is `max(1, len / 20)`, always starting at month 1.
pub fn payment_distribution(schedule: &[PaymentDetails]) -> PaymentDistribution {
    let interval = (schedule.len() / DISTRIBUTION_POINTS).max(1);
    let sampled = sample_every(schedule, interval);

    PaymentDistribution {
        labels: sampled.iter().map(|p| format!("Month {}", p.month)).collect(),
        principal: sampled.iter().map(|p| p.principal).collect(),
        interest: sampled.iter().map(|p| p.interest).collect(),
    }
}

/// Every `interval`-th entry, starting with the first. An interval of zero is
/// treated as one.
pub fn sample_every(schedule: &[PaymentDetails], interval: usize) -> Vec<PaymentDetails> {
    schedule
        .iter()
        .step_by(interval.max(1))
        .cloned()
        .collect()
}

/// How the first month's payment divides between principal and interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSplit {
    pub principal: Money,
    pub interest: Money,
    /// Share of `monthlyPayment`, in percent
    pub principal_pct: Decimal,
    pub interest_pct: Decimal,
}

/// Month-1 principal/interest split as shares of the summary's monthly payment.
pub fn first_payment_split(summary: &LoanSummary) -> PaymentSplit {
    let (principal, interest) = summary
        .amortization_schedule
        .first()
        .map(|p| (p.principal, p.interest))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));

    let share = |amount: Money| {
        if summary.monthly_payment.is_zero() {
            Decimal::ZERO
        } else {
            amount / summary.monthly_payment * dec!(100)
        }
    };

    PaymentSplit {
        principal,
        interest,
        principal_pct: share(principal),
        interest_pct: share(interest),
    }
}

/// Financed principal against lifetime interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub principal: Money,
    pub total_interest: Money,
    pub down_payment: Money,
    pub total_cost: Money,
}

pub fn cost_breakdown(params: &LoanParams, summary: &LoanSummary) -> CostBreakdown {
    CostBreakdown {
        principal: params.financed_principal(),
        total_interest: summary.total_interest,
        down_payment: params.down_payment,
        total_cost: summary.total_cost,
    }
}
