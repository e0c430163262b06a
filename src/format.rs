use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::round_rupee;

/// Format whole rupees with Indian digit grouping, e.g. `₹12,34,567`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_rupee(amount);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_indian(&digits);
    if rounded < Decimal::ZERO {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Last three digits, then groups of two (lakh, crore, ...)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Percentage for display, e.g. `0.22` -> `22%`
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * dec!(100)).normalize())
}
