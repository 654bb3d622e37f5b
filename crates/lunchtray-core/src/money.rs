//! Money helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a price label, e.g. `$5.94`.
///
/// Always prints exactly two decimals.
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    let mut cents = round_cents(amount);
    cents.rescale(2);
    format!("{}{}", symbol, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_two_decimals() {
        assert_eq!(format_price(Decimal::new(4, 0), "$"), "$4.00");
        assert_eq!(format_price(Decimal::new(55, 1), "$"), "$5.50");
        assert_eq!(format_price(Decimal::ZERO, "€"), "€0.00");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_cents(Decimal::new(1225, 4)), Decimal::new(12, 2));
        assert_eq!(round_cents(Decimal::new(125, 3)), Decimal::new(13, 2));
        assert_eq!(format_price(Decimal::new(12345, 4), "$"), "$1.23");
    }
}
