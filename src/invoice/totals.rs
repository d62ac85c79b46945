use rust_decimal::Decimal;

use super::types::{LineItem, Totals};

/// Sum line amounts and add tax, rounding each figure to 2 decimal places.
pub fn calculate_totals(lines: &[LineItem], tax: Decimal) -> Totals {
    let subtotal = lines
        .iter()
        .map(|l| l.amount)
        .sum::<Decimal>()
        .round_dp(2);
    let tax = tax.round_dp(2);
    Totals {
        subtotal,
        tax,
        total: (subtotal + tax).round_dp(2),
    }
}
