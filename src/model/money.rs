//! Two-decimal formatting of expense amounts.
//!
//! Amounts are stored as `f64`, but they are never formatted straight from binary floating point.
//! Each value is first converted to a `Decimal` through its shortest round-trip text (so `10.005`
//! becomes exactly `10.005`), sums are taken in `Decimal`, and only then is the result rounded to
//! two places, half away from zero.
//!
//! ```
//! # use ledgerline::model::money;
//! assert_eq!(money::format_amount(10.005), "10.01");
//! assert_eq!(money::format_total([10.005, 2.00]), "12.01");
//! assert_eq!(money::format_amount(-3.0), "-3.00");
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const PLACES: u32 = 2;

/// Formats a single amount with exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    match to_decimal(value) {
        Some(d) => format_decimal(d),
        None => format!("{value:.2}"),
    }
}

/// Sums `values` and formats the total with exactly two decimal places. Falls back to a plain
/// `f64` sum if any value is out of `Decimal` range.
pub fn format_total(values: impl IntoIterator<Item = f64>) -> String {
    let values: Vec<f64> = values.into_iter().collect();
    let total = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        to_decimal(*v).and_then(|d| acc.checked_add(d))
    });
    match total {
        Some(d) => format_decimal(d),
        None => format!("{:.2}", values.iter().sum::<f64>()),
    }
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

fn format_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PLACES);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(10.005), "10.01");
        assert_eq!(format_amount(-10.005), "-10.01");
        assert_eq!(format_amount(1.004), "1.00");
        assert_eq!(format_amount(2.675), "2.68");
    }

    #[test]
    fn pads_to_two_places() {
        assert_eq!(format_amount(12.0), "12.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn tiny_negative_is_not_negative_zero() {
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn total_is_summed_before_rounding() {
        assert_eq!(format_total([10.005, 2.00]), "12.01");
        assert_eq!(format_total([0.1, 0.2]), "0.30");
        assert_eq!(format_total([0.005, 0.005]), "0.01");
        assert_eq!(format_total(Vec::<f64>::new()), "0.00");
    }

    #[test]
    fn huge_values_fall_back_to_float_formatting() {
        assert_eq!(format_amount(1e30), format!("{:.2}", 1e30));
    }
}
