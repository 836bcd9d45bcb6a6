//! Locale-neutral amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum fractional digits shown for an amount.
pub const MAX_FRACTION_DIGITS: u32 = 6;

/// Render `amount` with between 0 and [`MAX_FRACTION_DIGITS`] fractional
/// digits.
///
/// Midpoints round away from zero. Trailing fractional zeros are dropped and
/// no grouping separators are emitted, so `1500.250000` renders as `1500.25`
/// and `2.0` as `2`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        // never render "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_amount(dec!(100)), "100");
        assert_eq!(format_amount(dec!(2.000)), "2");
    }

    #[test]
    fn trailing_zeros_are_suppressed() {
        assert_eq!(format_amount(dec!(1500.250000)), "1500.25");
    }

    #[test]
    fn rounds_to_six_digits() {
        assert_eq!(format_amount(dec!(0.123456789)), "0.123457");
        assert_eq!(format_amount(dec!(1.0000004)), "1");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(format_amount(dec!(0.0000005)), "0.000001");
        assert_eq!(format_amount(dec!(-0.0000005)), "-0.000001");
    }

    #[test]
    fn tiny_values_round_to_zero() {
        assert_eq!(format_amount(dec!(0.0000001)), "0");
        assert_eq!(format_amount(dec!(-0.0000001)), "0");
    }

    #[test]
    fn no_grouping_separators() {
        assert_eq!(format_amount(dec!(1234567.5)), "1234567.5");
    }
}
