use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Money, Percentage};

/// US-dollar display string: `$` prefix, comma thousands separators and at
/// most two fraction digits with trailing zeros dropped.
///
/// `1216.0447` renders as `$1,216.04`, `240000` as `$240,000` and `-12.5` as
/// `-$12.5`. A negative amount keeps its sign even when it rounds to zero.
pub fn format_currency(amount: Money) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{}${}", sign_of(amount), group_thousands(rounded.abs()))
}

/// Percentage display string with thousands separators and exactly two
/// fraction digits.
///
/// The input is already in percent units, so `4.5` renders as `4.50%`.
pub fn format_percentage(value: Percentage) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{}{}%", sign_of(value), group_thousands(rounded.abs()))
}

fn sign_of(value: Decimal) -> &'static str {
    if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Comma-group the integer digits of a non-negative decimal, keeping its
/// fraction as rendered.
fn group_thousands(value: Decimal) -> String {
    let digits = value.to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits.as_str(), None),
    };

    let len = whole.len();
    let mut out = String::with_capacity(digits.len() + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Whole-dollar label used on chart axes.
pub fn format_currency_whole(amount: Money) -> String {
    format_currency(amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}
